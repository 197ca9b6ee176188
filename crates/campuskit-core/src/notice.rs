//! User-facing event messages.
//!
//! The core rule-engines never render anything themselves: every operation
//! produces a [`Notice`] (message text plus severity) and the caller forwards
//! it to whatever notification surface it owns. The [`Notifier`] trait is the
//! seam a caller implements; [`MemoryNotifier`] is the in-memory
//! implementation used by tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity category of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A human-readable event produced by a core operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

/// Collaborator that receives notices for display.
///
/// The core only produces message text and severity; rendering is entirely
/// the implementor's concern.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// In-memory notifier that records everything it receives.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Vec<Notice>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Messages received so far, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
