//! # Notification Sinks
//!
//! Where user-facing cart messages ("Added to cart", "Item already in cart")
//! go. Stores report through a sink and never wait on it.
//!
//! ```text
//! CartStore ──notify()──► LogSink      → tracing (CLI, stderr)
//!                    └──► ChannelSink  → mpsc receiver (UI loop, tests)
//! ```

use storefront_core::{Notification, NotificationKind};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Fire-and-forget receiver of notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(id = %notification.id, "{}", notification.message),
            NotificationKind::Error => warn!(id = %notification.id, "{}", notification.message),
        }
    }
}

/// Forwards notifications over an unbounded channel.
///
/// Sending never blocks. If the receiver is gone the notification is dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelSink { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        sink.notify(Notification::success("Added to cart"));
        sink.notify(Notification::error("Item already in cart"));

        assert_eq!(rx.recv().await.unwrap().message, "Added to cart");
        let second = rx.recv().await.unwrap();
        assert!(second.is_error());
        assert_eq!(second.message, "Item already in cart");
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        sink.notify(Notification::success("Removed from cart"));
    }
}
