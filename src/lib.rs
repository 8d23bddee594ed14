pub mod error;
pub mod event;
pub mod handlers;
pub mod notifier;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::error::{AlertError, Result};
use crate::notifier::Notifier;

#[derive(Debug, Clone)]
pub struct AlertConfig {
    pub webhook_url: String,
}

impl AlertConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let webhook_url = std::env::var("SLACK_WEBHOOK_URL").map_err(|_| {
            AlertError::Config("SLACK_WEBHOOK_URL environment variable is required".to_string())
        })?;
        if webhook_url.is_empty() {
            return Err(AlertError::Config(
                "SLACK_WEBHOOK_URL must not be empty".to_string(),
            ));
        }

        Ok(Self { webhook_url })
    }
}

pub struct AppState {
    pub notifier: Notifier,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;
