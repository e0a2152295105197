use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use videowall_api::config::ServerConfig;
use videowall_api::router::build_app_router;
use videowall_api::state::AppState;
use videowall_directory::{CameraCatalog, HttpCameraDirectory};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "videowall_api=debug,videowall_directory=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Camera directory ---
    let directory = HttpCameraDirectory::new(
        config.camera_directory_url.clone(),
        config.directory_timeout(),
    )
    .expect("Failed to build camera directory client");
    tracing::info!(url = %directory.url(), "Camera directory client created");

    let catalog = Arc::new(CameraCatalog::new(Arc::new(directory)));
    let initial = catalog.refresh().await;
    tracing::info!(
        count = initial.cameras.len(),
        source = ?initial.source,
        "Initial camera catalog loaded",
    );

    // --- App state ---
    let state = AppState::new(config.clone(), catalog);

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it, so the
/// server drains in-flight wall requests before exiting.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, relying on Ctrl-C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let signal = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Ctrl-C handler failed");
            }
            "SIGINT"
        }
        () = sigterm => "SIGTERM",
    };

    tracing::info!(signal, "Shutting down video wall server");
}
