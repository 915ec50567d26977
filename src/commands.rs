//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use std::time::Duration;

/// Severity of a host notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// How a notification goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// User closes it
    Manual,
    After(Duration),
}

/// Toast the host should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub dismiss: Dismiss,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            dismiss: Dismiss::Manual,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            dismiss: Dismiss::Manual,
        }
    }

    pub fn dismiss_after(mut self, duration: Duration) -> Self {
        self.dismiss = Dismiss::After(duration);
        self
    }
}

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCmd {
    /// Re-render the picker and editor chrome
    Redraw,
    /// The value record changed and should be persisted by the form
    Persist,
    Notify(Notification),
    /// Execute multiple commands
    Batch(Vec<FieldCmd>),
}

impl FieldCmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<FieldCmd>) -> Self {
        FieldCmd::Batch(cmds)
    }

    /// Notifications carried by this command, flattening batches
    pub fn notifications(&self) -> Vec<&Notification> {
        match self {
            FieldCmd::Notify(n) => vec![n],
            FieldCmd::Batch(cmds) => cmds.iter().flat_map(|c| c.notifications()).collect(),
            _ => Vec::new(),
        }
    }
}
