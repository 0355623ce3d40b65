use std::sync::Arc;
use std::net::SocketAddr;
use anyhow::Context;
use busline_api::{app, worker, AppState};
use busline_store::{Config, MockTripProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SESSION_SWEEP_SECONDS: u64 = 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "busline_api=debug,busline_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Busline API on port {}", config.server.port);

    // Mock roster until a real inventory service exists
    let provider = Arc::new(MockTripProvider::seeded());
    let app_state = AppState::new(provider, &config);

    tokio::spawn(worker::start_session_sweeper(
        app_state.sessions.clone(),
        std::time::Duration::from_secs(SESSION_SWEEP_SECONDS),
    ));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
