mod config;
mod credential;
mod llm;
mod routes;
mod state;
mod translate;
mod ui;

use anyhow::{Context, Result};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mistral_translator=debug,tower_http=debug")),
        )
        .init();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let (config, _) = Config::discover(&Config::candidate_paths())?;

    let app_state = AppState::new(config.clone());
    if app_state.has_server_credential() {
        info!(
            "API key found; translating with model {}",
            config.translator_config.model
        );
    } else {
        warn!(
            "{} is not set; users will be asked for an API key",
            config.translator_config.api_key_env
        );
    }

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    let server_config = &config.server_config;
    let listener =
        tokio::net::TcpListener::bind((server_config.host.as_str(), server_config.port))
            .await
            .with_context(|| {
                format!("Failed to bind {}:{}", server_config.host, server_config.port)
            })?;
    info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
