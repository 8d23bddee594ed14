//! Slack webhook delivery

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::event::JobStateChange;

/// Message payload accepted by Slack incoming webhooks.
#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub text: String,
}

/// Status code and decoded body returned by the webhook endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    pub status_code: u16,
    pub response: String,
}

/// Posts failure alerts to a Slack incoming webhook.
///
/// Holds one pooled `reqwest::Client` for the lifetime of the process;
/// the webhook URL is injected at construction.
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Build the alert text for a failed job: an emoji-prefixed header
    /// naming the job, followed by the full detail mapping as indented JSON.
    pub fn failure_message(job_name: &str, detail: &Value) -> Result<String> {
        let dump = serde_json::to_string_pretty(detail)?;
        Ok(format!(
            "🚨 AWS Glue Job Failed: {}\n\nDetails: {}",
            job_name, dump
        ))
    }

    /// Send one failure alert. The webhook's status and body are reported
    /// as-is; a non-2xx response is not inspected or retried. Transport
    /// errors propagate to the caller.
    pub async fn notify_failure(&self, job: &JobStateChange) -> Result<DeliveryResult> {
        let message = SlackMessage {
            text: Self::failure_message(&job.job_name, &job.detail)?,
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        debug!("Webhook responded {}: {}", status_code, body);

        Ok(DeliveryResult {
            status_code,
            response: body,
        })
    }
}
