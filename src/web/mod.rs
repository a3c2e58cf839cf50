//! Web server and API endpoints for the facility simulator.
//!
//! Handlers receive an injected [`AppState`] holding the facility store;
//! there is no module-level global state.

pub mod config;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

// Re-export commonly used items
pub use config::WebConfig;
pub use response::ApiResponse;
pub use router::create_app;
pub use state::AppState;

use crate::error::{FacilityError, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

/// Start the web server with the provided configuration.
///
/// Generates the fleet, binds, and serves until Ctrl+C or SIGTERM.
pub async fn start_web_server(config: WebConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    let facilities = state.store.len().await;
    info!(
        facilities,
        seed = ?config.seed,
        "facility store initialized"
    );

    let app = create_app(&config, state);

    // Parse the bind address
    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| FacilityError::config_error(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        FacilityError::web_server_error(format!("Failed to bind to address: {}", e))
    })?;

    info!("Starting facility simulator on http://{}", addr);
    info!("Analytics: http://{}/api/analytics", addr);
    info!("Facilities: http://{}/api/facilities", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FacilityError::web_server_error(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C signal, shutting down"),
        _ = terminate => info!("received SIGTERM signal, shutting down"),
    }
}
