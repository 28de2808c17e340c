use std::time::{Duration, Instant};

/// How long a notification stays up after the latest `notify`.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Single-slot banner. A new notification replaces the current one and
/// restarts the dismiss timer; nothing is queued.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::warn!(%message, "error notification"),
            _ => tracing::debug!(%message, ?severity, "notification"),
        }
        self.current = Some(Notification {
            message,
            severity,
            expires_at: now + NOTIFICATION_TIMEOUT,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    /// Dismiss the notification if its time is up. Returns true if it was
    /// dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
