//! # Notifications
//!
//! Toast-style messages describing the outcome of a user action.
//!
//! The core only builds these values. Delivering them (toast, log line,
//! channel) is the job of a sink in the client crate, and no response from
//! the sink is ever consumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single fire-and-forget notification.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique id, so a UI can dismiss or de-duplicate toasts.
    #[ts(as = "String")]
    pub id: Uuid,

    pub kind: NotificationKind,

    pub message: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification of the given kind.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_get_distinct_ids() {
        let a = Notification::success("Added to cart");
        let b = Notification::success("Added to cart");
        assert_ne!(a.id, b.id);
        assert!(!a.is_error());
        assert!(Notification::error("nope").is_error());
    }

    #[test]
    fn test_notification_wire_shape() {
        let json = serde_json::to_value(Notification::error("Item already in cart")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Item already in cart");
        assert!(json.get("createdAt").is_some());
    }
}
