use std::sync::Arc;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Rebuild the post catalog every time the process receives SIGHUP
#[cfg(unix)]
pub async fn reload_posts_on_hangup(state: Arc<AppState>, cancel: CancellationToken) {
    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!("SIGHUP handler unavailable, posts will not reload: {e}");
            return;
        }
    };

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            received = hangup.recv() => {
                if received.is_none() {
                    break;
                }
                tracing::info!("Received SIGHUP, reloading posts");
                if let Err(e) = state.reload_posts().await {
                    tracing::error!("Post reload failed: {e}");
                }
            }
        }
    }
}

#[cfg(not(unix))]
pub async fn reload_posts_on_hangup(_state: Arc<AppState>, cancel: CancellationToken) {
    cancel.cancelled().await;
}
