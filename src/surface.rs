use crate::service::{Record, ServiceError};
use std::fmt;
use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Error,
}

/// Transient message shown on top of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Information,
            created: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= NOTIFICATION_TIMEOUT
    }
}

/// Recoverable failures of user-triggered service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Executing a typed command failed.
    Dispatch(ServiceError),
    /// Fetching the records failed.
    Load(ServiceError),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Dispatch(err) => write!(f, "Command failed: {err}"),
            Failure::Load(err) => write!(f, "Error loading data: {err}"),
        }
    }
}

impl std::error::Error for Failure {}

impl From<Failure> for Notification {
    fn from(failure: Failure) -> Self {
        Notification::error(failure.to_string())
    }
}

/// Something that can display rows, a status line and notifications.
pub trait Surface {
    fn update_status(&mut self, message: &str);

    /// Replaces the displayed rows.
    fn show_records(&mut self, records: &[Record]);

    fn notify(&mut self, notification: Notification);
}
