//! netsweep - Main application entry point
//!
//! Starts the HTTP API that triggers host-discovery scans of
//! pre-configured network segments.

use std::net::SocketAddr;

use tokio::{net::TcpListener, signal};

use netsweep::{Config, create_app, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // A load or validation failure is fatal; the process must not serve
    // with a partially loaded segment registry
    let config = Config::load().map_err(|e| {
        std::io::Error::other(format!(
            "Failed to load configuration. Check config files and NETSWEEP__* env vars: {}",
            e
        ))
    })?;

    init_tracing(&config.logging)?;

    tracing::info!(
        segments = config.scanner.segments.len(),
        mode = ?config.scanner.mode,
        "Starting netsweep server"
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let enable_docs = config.server.enable_docs;

    let app = create_app(config);

    tracing::info!("Server listening on {}", addr);
    if enable_docs {
        tracing::info!("API documentation available at http://{}/docs", addr);
    }

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
