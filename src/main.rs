use chrono::Utc;
use glue_slack_alerts::handlers::create_router;
use glue_slack_alerts::notifier::Notifier;
use glue_slack_alerts::{AlertConfig, AppState};
use std::sync::Arc;
use std::time::Instant;
use tracing::{self, info};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    let config = match AlertConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        notifier: Notifier::new(config.webhook_url),
        start_time: Instant::now(),
        started_at: Utc::now(),
    });

    tracing_subscriber::fmt::init();
    let app = create_router(state);

    info!("Listening on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(bind_address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
