//! # Inkwell API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;

mod app;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Invalid configuration never reaches the listening state
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::io::Error::other(e)
    })?;

    let state = AppState::connect(&config.database).await?;

    let app_state = state.clone();
    let server = HttpServer::new(move || app::build_app(app_state.clone()))
        .disable_signals()
        .bind((config.host.as_str(), config.port))?
        .run();
    let handle = server.handle();

    tracing::info!(
        environment = %config.environment,
        "Server is listening on port {}",
        config.port
    );
    tracing::info!("  localhost: http://localhost:{}", config.port);

    tokio::select! {
        result = server => result?,
        _ = tokio::signal::ctrl_c() => {
            // In-flight requests are dropped, not drained.
            tracing::info!("Interrupt received, shutting down");
            handle.stop(false).await;
            state.close().await;
        }
    }

    Ok(())
}
