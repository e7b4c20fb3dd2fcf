use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Notification collaborator (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn error(&self, message: &str) {
        self.notify(Notification {
            level: NotificationLevel::Error,
            message: message.to_string(),
        });
    }

    fn success(&self, message: &str) {
        self.notify(Notification {
            level: NotificationLevel::Success,
            message: message.to_string(),
        });
    }
}
