use super::{shutdown_signal, ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

///
/// Auth is applied to matched routes only, tracing wraps every request
///
pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    let ApplicationMiddleware { auth, trace } = application_middleware;

    routing(auth).with_state(application_state).layer(trace)
}

///
/// Serves application until Ctrl+C or SIGTERM is received
///
pub async fn serve_application(
    bind_address: SocketAddr,
    application: Router,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
