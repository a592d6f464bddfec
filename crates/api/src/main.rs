use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polyglot_api::config::ServerConfig;
use polyglot_api::router::build_app_router;
use polyglot_api::state::AppState;
use polyglot_core::results::ResultStore;
use polyglot_core::xdg::BaseDirs;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polyglot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let ip: IpAddr = config.host.parse().unwrap_or_else(|e| {
        tracing::error!(host = %config.host, error = %e, "HOST must be an IP address");
        std::process::exit(1);
    });

    // --- Result store ---
    let base_dirs = BaseDirs::from_env();
    let results = ResultStore::from_base_dirs(&base_dirs).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Cannot locate data directory");
        std::process::exit(1);
    });
    tracing::info!(file = %results.path().display(), "Result file location");

    tracing::info!(
        program = %config.processor.program,
        args = ?config.processor.args,
        working_directory = ?config.processor.working_directory,
        "Processor command"
    );

    // --- App state + router ---
    let state = AppState::new(config.clone(), results, base_dirs);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });

    tracing::info!(%addr, "Polyglot API server started");
    tracing::info!("  GET  /                 - Welcome and info");
    tracing::info!("  GET  /api/health       - Health check");
    tracing::info!("  POST /api/process      - Trigger processing");
    tracing::info!("  GET  /api/results      - Get processing results");
    tracing::info!("  GET  /api/env          - Environment information");
    tracing::info!("  GET  /api/greet/{{name}} - Personalised greeting");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
