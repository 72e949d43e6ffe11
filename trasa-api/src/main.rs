use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trasa_api::{app, AppState};
use trasa_core::{BookingManager, BookingRepository};
use trasa_store::{DbClient, PgBookingRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trasa_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = trasa_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Trasa API on port {}", config.server.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Without a database url the service still comes up, but only the
    // health probes are served.
    if config.database.url.is_empty() {
        tracing::warn!("Database not configured, running with health checks only");
        return serve(addr, health_only()).await;
    }

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to Postgres")?;
    db.migrate().await.context("Failed to run migrations")?;

    let repo: Arc<dyn BookingRepository> = Arc::new(PgBookingRepository::new(db.pool.clone()));
    let manager = Arc::new(BookingManager::new(repo));

    serve(addr, app(AppState::new(manager))).await
}

async fn serve(addr: SocketAddr, router: axum::Router) -> anyhow::Result<()> {
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn health_only() -> axum::Router {
    use axum::routing::get;

    axum::Router::new()
        .route("/health", get(trasa_api::health::health))
        .route("/ping", get(trasa_api::health::health))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
