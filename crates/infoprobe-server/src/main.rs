//! infoprobe server
//!
//! - `GET /`         : 302 to `/get_info`
//! - `GET /get_info` : app title/version and a greeting with the host name
//! - `GET /metrics`  : request counters and host gauges, Prometheus text format

use tracing_subscriber::{fmt, EnvFilter};

use infoprobe_core::error::{ProbeError, Result};
use infoprobe_server::{app_state::AppState, config::AppConfig, router};

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before the env filter and config read their variables.
    let dotenv = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "env file ignored"),
    }

    let cfg = AppConfig::from_env()?;
    let listen = cfg.listen;

    tracing::info!(%listen, title = %cfg.title, version = %cfg.version, "infoprobe starting");

    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ProbeError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ProbeError::Internal(format!("server failed: {e}")))?;

    tracing::info!("infoprobe stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
