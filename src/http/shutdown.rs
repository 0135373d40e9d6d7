//! Graceful shutdown and signal handling.
//!
//! SIGTERM/SIGINT trigger a graceful shutdown with connection draining.

use std::future::Future;
use std::time::Duration;

use axum_server::Handle;

/// Signal that requested the stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    Terminate,
}

/// Wait for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
///
/// A signal whose handler cannot be installed never fires; the failure is logged.
pub async fn shutdown_signal() -> ShutdownSignal {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => ShutdownSignal::CtrlC,
        _ = terminate => ShutdownSignal::Terminate,
    }
}

/// Wait for `signal`, then start a graceful shutdown on `handle`.
///
/// The server stops accepting connections and gives open ones up to
/// `grace` to finish.
pub async fn shutdown_on<S>(handle: Handle, grace: Duration, signal: S)
where
    S: Future<Output = ShutdownSignal>,
{
    match signal.await {
        ShutdownSignal::CtrlC => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        ShutdownSignal::Terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    handle.graceful_shutdown(Some(grace));
    tracing::info!(
        grace_seconds = grace.as_secs(),
        "Graceful shutdown initiated, waiting for connections to close"
    );
}

/// Setup graceful shutdown on SIGTERM and SIGINT.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(shutdown_on(handle, grace, shutdown_signal()));
}
