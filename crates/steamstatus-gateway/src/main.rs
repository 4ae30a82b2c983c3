//! steamstatus gateway
//!
//! - `GET /steam-status.svg`: live Steam profile stats rendered as SVG
//! - `GET /healthz`: liveness
//!
//! Config: `STEAMSTATUS_CONFIG` (default `steamstatus.yaml`, optional), then
//! `PORT`, `STEAM_VANITY`, `GAMES_FALLBACK`, `PERFECT_GAMES_FALLBACK`.

use tracing_subscriber::{fmt, EnvFilter};

use steamstatus_core::error::{Result, SteamStatusError};
use steamstatus_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code().as_str(), error = %e, "steamstatus-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path =
        std::env::var("STEAMSTATUS_CONFIG").unwrap_or_else(|_| config::DEFAULT_PATH.to_string());
    let cfg = config::load(&path, |key| std::env::var(key).ok())?;
    let listen = cfg.server.socket_addr()?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(
        %listen,
        vanity = %state.cfg().profile.vanity,
        profile = state.aggregator().profile_url(),
        source = state.renderer().source(),
        "steamstatus-gateway starting"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SteamStatusError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SteamStatusError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
