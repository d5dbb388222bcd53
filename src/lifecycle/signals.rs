//! Signal handling.

/// Wait for Ctrl+C (SIGINT).
///
/// Returns early (logging the failure) if the signal handler cannot be
/// installed, leaving shutdown to an external kill.
pub async fn wait_for_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
