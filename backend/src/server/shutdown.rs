//! Graceful shutdown: fail liveness, let probes observe it, then drain.

use std::future::Future;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use crate::inbound::http::health::HealthState;

/// How long liveness reports failure before the listener stops accepting.
pub const DRAIN_GRACE: Duration = Duration::from_secs(5);

/// Resolve on Ctrl-C, or on `SIGTERM` where the platform has one.
///
/// # Errors
/// Returns the I/O error raised when a signal handler cannot be installed.
pub async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Wait for `signal`, mark the service unhealthy, then stop the server
/// gracefully once `grace` has elapsed.
///
/// A failed signal future still drains: the process cannot be told to stop
/// any other way.
pub async fn drain_on<F>(
    signal: F,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    grace: Duration,
) where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal handler failed");
    }
    health_state.mark_unhealthy();
    info!(grace_ms = grace.as_millis(), "draining");
    tokio::time::sleep(grace).await;
    handle.stop(true).await;
}
