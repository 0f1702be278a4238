//! One-slot holder for the latest user-facing outcome.
//!
//! `set` always overwrites. There is no queue and no expiry; the marker at
//! the start of the text is the only severity information.

use crate::core::error::NoteError;

pub const SUCCESS: &str = "✅";
pub const WARNING: &str = "⚠️";
pub const ERROR: &str = "❌";
pub const INFO: &str = "📝";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusReporter {
    message: Option<String>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn success(&mut self, text: impl AsRef<str>) {
        self.set(format!("{SUCCESS} {}", text.as_ref()));
    }

    pub fn warn(&mut self, text: impl AsRef<str>) {
        self.set(format!("{WARNING} {}", text.as_ref()));
    }

    pub fn error(&mut self, text: impl AsRef<str>) {
        self.set(format!("{ERROR} {}", text.as_ref()));
    }

    pub fn info(&mut self, text: impl AsRef<str>) {
        self.set(format!("{INFO} {}", text.as_ref()));
    }

    /// Reports a failure with the marker matching its kind.
    pub fn failure(&mut self, context: &str, err: &NoteError) {
        if err.is_warning() {
            self.warn(format!("{context}: {err}"));
        } else {
            self.error(format!("{context}: {err}"));
        }
    }
}
