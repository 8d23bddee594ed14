//! Incoming job state change events

use serde_json::Value;

pub const UNKNOWN_JOB: &str = "Unknown Job";
pub const UNKNOWN_STATE: &str = "Unknown State";

/// Fields extracted from a Glue job state change event.
/// The full `detail` mapping is kept alongside so any extra fields
/// (error message, run id, ...) pass through into the alert verbatim.
#[derive(Debug, Clone)]
pub struct JobStateChange {
    pub job_name: String,
    pub state: String,
    pub detail: Value,
}

impl JobStateChange {
    /// Extract the job name and state from an event payload.
    /// Missing fields degrade to placeholder text rather than failing.
    pub fn from_event(event: &Value) -> Self {
        let detail = event
            .get("detail")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()));

        let job_name = detail
            .get("jobName")
            .and_then(|v| v.as_str())
            .unwrap_or(UNKNOWN_JOB)
            .to_string();
        let state = detail
            .get("state")
            .and_then(|v| v.as_str())
            .unwrap_or(UNKNOWN_STATE)
            .to_string();

        Self {
            job_name,
            state,
            detail,
        }
    }

    /// Returns true if the job finished in the FAILED state.
    pub fn is_failed(&self) -> bool {
        self.state == "FAILED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_name_and_state_from_detail() {
        let event = json!({
            "detail": {
                "jobName": "etl-job-1",
                "state": "FAILED",
                "errorMessage": "OOM"
            }
        });

        let job = JobStateChange::from_event(&event);
        assert_eq!(job.job_name, "etl-job-1");
        assert_eq!(job.state, "FAILED");
        assert!(job.is_failed());
        assert_eq!(job.detail["errorMessage"], "OOM");
    }

    #[test]
    fn empty_event_falls_back_to_placeholders() {
        let job = JobStateChange::from_event(&json!({}));
        assert_eq!(job.job_name, UNKNOWN_JOB);
        assert_eq!(job.state, UNKNOWN_STATE);
        assert!(!job.is_failed());
    }

    #[test]
    fn missing_fields_within_detail_fall_back() {
        let job = JobStateChange::from_event(&json!({ "detail": {} }));
        assert_eq!(job.job_name, UNKNOWN_JOB);
        assert_eq!(job.state, UNKNOWN_STATE);
    }

    #[test]
    fn state_match_is_exact() {
        let job = JobStateChange::from_event(&json!({ "detail": { "state": "failed" } }));
        assert!(!job.is_failed());

        let job = JobStateChange::from_event(&json!({ "detail": { "state": "SUCCEEDED" } }));
        assert!(!job.is_failed());
    }

    #[test]
    fn non_object_detail_does_not_panic() {
        let job = JobStateChange::from_event(&json!({ "detail": 42 }));
        assert_eq!(job.job_name, UNKNOWN_JOB);
        assert_eq!(job.state, UNKNOWN_STATE);
    }
}
