//! Small helpers shared by the UI and the background fetch.

use tokio::sync::mpsc;

/// Send a value through a channel, logging a warning if the receiver is gone.
///
/// The fetch task outlives the UI when the user quits before the board
/// arrives; that send failing is expected and only worth a log line.
pub async fn send_or_log<T>(tx: &mpsc::Sender<T>, value: T, context: &str) {
    if let Err(e) = tx.send(value).await {
        tracing::warn!("Failed to send {}: {}", context, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_or_log_delivers() {
        let (tx, mut rx) = mpsc::channel(1);
        send_or_log(&tx, "board", "fetch result").await;
        assert_eq!(rx.recv().await, Some("board"));
    }

    #[tokio::test]
    async fn test_send_or_log_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel::<&str>(1);
        drop(rx);
        send_or_log(&tx, "board", "fetch result").await;
    }
}
