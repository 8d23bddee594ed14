use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Custom error type for glue_slack_alerts operations
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Webhook delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Helper type for Results that use AlertError
pub type Result<T> = std::result::Result<T, AlertError>;

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        let status = match &self {
            AlertError::Delivery(_) => StatusCode::BAD_GATEWAY,
            AlertError::Config(_) | AlertError::Serialize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
