//! # Session State
//!
//! Everything one running instance knows, in one place.
//!
//! ```text
//! Session
//! ├── mode: Mode                      // exactly one active at a time
//! │   ├── Idle
//! │   ├── Creating { draft }          // filename being typed
//! │   ├── Browsing { entries, selected }
//! │   └── Editing { note }            // owns the open file handle
//! ├── status: StatusReporter          // last outcome message
//! └── discard_armed: bool             // first Esc on unsaved edits seen
//! ```
//!
//! The open note lives inside `Mode::Editing`, so "a note is open" and
//! "the mode is Editing" cannot disagree. State changes only happen through
//! `update(session, vault, action)` in action.rs.

use log::info;

use crate::core::buffer::NoteBuffer;
use crate::core::catalog::ListEntry;
use crate::core::status::StatusReporter;

#[derive(Debug)]
pub enum Mode {
    Idle,
    Creating {
        draft: String,
    },
    Browsing {
        entries: Vec<ListEntry>,
        selected: Option<usize>,
    },
    Editing {
        note: NoteBuffer,
    },
}

/// Data-free view of [`Mode`], for display and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Creating,
    Browsing,
    Editing,
}

impl ModeKind {
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Idle => "Idle",
            ModeKind::Creating => "New note",
            ModeKind::Browsing => "Notes",
            ModeKind::Editing => "Editing",
        }
    }
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Idle => ModeKind::Idle,
            Mode::Creating { .. } => ModeKind::Creating,
            Mode::Browsing { .. } => ModeKind::Browsing,
            Mode::Editing { .. } => ModeKind::Editing,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    mode: Mode,
    pub status: StatusReporter,
    pub(crate) discard_armed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            status: StatusReporter::new(),
            discard_armed: false,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub(crate) fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    pub fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn open_note(&self) -> Option<&NoteBuffer> {
        match &self.mode {
            Mode::Editing { note } => Some(note),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            Mode::Creating { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        match &self.mode {
            Mode::Browsing { entries, .. } => entries,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.mode {
            Mode::Browsing { selected, .. } => *selected,
            _ => None,
        }
    }

    /// Switches to `next`. This is the only place an open note is released,
    /// so every way out of `Editing` closes the file handle.
    pub(crate) fn enter(&mut self, next: Mode) {
        let from = self.mode.kind();
        let to = next.kind();
        let previous = std::mem::replace(&mut self.mode, next);
        if let Mode::Editing { note } = previous {
            note.release();
        }
        self.discard_armed = false;
        if from != to {
            info!("Mode {:?} -> {:?}", from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_vault;

    #[test]
    fn test_session_new_defaults() {
        let session = Session::new();
        assert_eq!(session.kind(), ModeKind::Idle);
        assert!(session.open_note().is_none());
        assert!(session.draft().is_none());
        assert!(session.entries().is_empty());
        assert_eq!(session.status.message(), None);
    }

    #[test]
    fn test_enter_releases_open_note() {
        let (_dir, vault) = temp_vault();
        let handle = vault.create_note("a.md").unwrap();
        let mut session = Session::new();
        session.enter(Mode::Editing {
            note: NoteBuffer::new(handle, String::new()),
        });
        assert_eq!(session.open_note().map(NoteBuffer::name), Some("a.md"));

        session.enter(Mode::Idle);
        assert!(session.open_note().is_none());
        assert_eq!(session.kind(), ModeKind::Idle);
    }

    #[test]
    fn test_accessors_follow_mode() {
        let mut session = Session::new();
        session.enter(Mode::Creating {
            draft: "todo".to_string(),
        });
        assert_eq!(session.draft(), Some("todo"));
        assert!(session.selected().is_none());

        session.enter(Mode::Browsing {
            entries: vec![ListEntry {
                title: "a.md".to_string(),
                description: "Modified: now".to_string(),
            }],
            selected: Some(0),
        });
        assert!(session.draft().is_none());
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.selected(), Some(0));
    }
}
