//! Notification surface contract and bundled notifiers.
//!
//! # Responsibility
//! - Carry user-facing outcome messages out of the controller.
//! - Keep delivery fire-and-forget: notifiers return nothing to the core.

use crate::config::NotificationConfig;
use crate::logging::sanitize_message;
use log::info;

const MAX_LOGGED_MESSAGE_CHARS: usize = 200;

/// One user-facing message with its dismiss action and display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub dismiss_label: String,
    pub duration_ms: u64,
}

impl Notification {
    /// Builds a notification using the configured label and duration.
    pub fn new(message: impl Into<String>, config: &NotificationConfig) -> Self {
        Self {
            message: message.into(),
            dismiss_label: config.dismiss_label.clone(),
            duration_ms: config.duration_ms,
        }
    }
}

/// Receiver of controller notifications.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Writes every notification as an `info` log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        info!(
            "event=notification module=notify status=ok duration_ms={} message={}",
            notification.duration_ms,
            sanitize_message(&notification.message, MAX_LOGGED_MESSAGE_CHARS)
        );
    }
}

/// Keeps every notification in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }

    /// Removes and returns everything received so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.received)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.received.push(notification.clone());
    }
}
