//! Single-slot notification channel.
//!
//! The session posts at most one pending message; a newer post
//! overwrites an unread one, and taking the message clears the slot
//! unconditionally. No ambient stringly-typed state.

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational (the printed passphrase).
    Info,
    /// A recoverable user-facing problem.
    Error,
}

/// One pending user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text.
    pub text: String,
    /// Presentation severity.
    pub severity: Severity,
}

impl Notification {
    /// Informational notification.
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Info }
    }

    /// Error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}

/// Holder for the at-most-one live [`Notification`].
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot(Option<Notification>);

impl NotificationSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notification, replacing any unread one.
    pub fn post(&mut self, notification: Notification) {
        self.0 = Some(notification);
    }

    /// Consume the pending notification, leaving the slot empty.
    pub fn take(&mut self) -> Option<Notification> {
        self.0.take()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
