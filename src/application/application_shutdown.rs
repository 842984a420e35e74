use super::ApplicationStateToClose;
use std::future::pending;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

///
/// Resolves on Ctrl+C or SIGTERM.
/// Signal that cannot be listened for is logged and never resolves.
///
pub async fn shutdown_signal() {
    let signal = tokio::select! {
        signal = ctrl_c() => signal,
        signal = terminate() => signal,
    };

    tracing::info!(signal, "starting shutdown");
}

async fn ctrl_c() -> &'static str {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for Ctrl+C");
        pending::<()>().await;
    }

    "ctrl_c"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            terminate.recv().await;
        }
        Err(err) => {
            tracing::error!(%err, "cannot listen for SIGTERM");
            pending::<()>().await;
        }
    }

    "terminate"
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    pending().await
}
