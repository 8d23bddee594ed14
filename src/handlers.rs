//! HTTP handlers for the alert relay

use axum::{
    Json, Router,
    body::Bytes,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing,
};
use serde_json::json;
use tracing::{self, debug, info};

use crate::SharedState;
use crate::error::AlertError;
use crate::event::JobStateChange;

/// Build the application router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(root))
        .route("/event", routing::post(handle_event))
        .route("/health", routing::get(health))
        .with_state(state)
}

pub async fn root() -> &'static str {
    "glue_slack_alerts"
}

/// Returns the current server status
pub async fn health(AxumState(state): AxumState<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "glue_slack_alerts",
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at,
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

/// Handles a Glue job state change event POST.
pub async fn handle_event(
    AxumState(state): AxumState<SharedState>,
    body: Bytes,
) -> Result<Response, AlertError> {
    // Parse body as JSON
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            info!("Could not parse JSON body: {:?}", e);
            return Ok(StatusCode::BAD_REQUEST.into_response());
        }
    };
    debug!("{:#?}", &payload);

    let job = JobStateChange::from_event(&payload);
    debug!("{:#?}", &job.detail);

    // Only alert on job failure
    if !job.is_failed() {
        info!(
            "Job '{}' in state '{}', nothing to report",
            job.job_name, job.state
        );
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let result = state.notifier.notify_failure(&job).await?;

    info!(
        "Forwarded failure alert for job '{}', webhook answered {}",
        job.job_name, result.status_code
    );

    Ok((StatusCode::OK, Json(result)).into_response())
}
