use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{error, info, warn};

/// Broadcasts once when ctrl-c arrives. If the signal listener cannot be
/// installed the sender is dropped, which closes the channel instead.
pub fn listen_for_ctrl_c() -> broadcast::Receiver<()> {
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("🛑 Shutdown signal received.");
                if let Err(e) = shutdown_tx.send(()) {
                    warn!("Failed to send shutdown signal: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        }
    });

    shutdown_rx
}

/// Resolves when shutdown should begin. Returns `false` when the channel
/// closed or lagged rather than delivering a signal.
pub async fn wait_for_shutdown(mut shutdown_rx: broadcast::Receiver<()>) -> bool {
    match shutdown_rx.recv().await {
        Ok(()) => true,
        Err(RecvError::Closed) => {
            warn!("⚠️  Shutdown channel closed before a signal arrived");
            false
        }
        Err(RecvError::Lagged(skipped)) => {
            warn!("⚠️  Shutdown receiver lagged by {skipped} messages");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signal_starts_shutdown() {
        let (tx, rx) = broadcast::channel(1);
        tx.send(()).unwrap();

        assert!(wait_for_shutdown(rx).await);
    }

    #[tokio::test]
    async fn closed_channel_still_returns() {
        let (tx, rx) = broadcast::channel::<()>(1);
        drop(tx);

        assert!(!wait_for_shutdown(rx).await);
    }
}
