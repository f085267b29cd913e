use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::notify::TerminalNotifier;

pub fn app(shared_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

// Run the server until the process is stopped
pub async fn serve(addr: String, config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let notifier = TerminalNotifier::from_config(&config);
    let shared_state = Arc::new(AppState::new(Arc::new(notifier)));
    let app = app(shared_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to listen on {}", addr))?;

    println!("Listening on: {}", addr);
    tracing::debug!(
        "Server started. Listening on {} with notifier {}",
        listener.local_addr()?,
        config.notifier_path
    );

    axum::serve(listener, app).await?;

    Ok(())
}
