//! Error taxonomy for vault and note operations.
//!
//! Only `Startup` is fatal. Everything else is recovered by the mode
//! controller and turned into a status line message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type NoteResult<T> = Result<T, NoteError>;

#[derive(Debug, Error)]
pub enum NoteError {
    /// The note was missing when it was read or opened.
    #[error("note '{0}' not found")]
    NotFound(String),

    /// A file with the canonical name is already in the vault.
    #[error("note '{0}' already exists")]
    AlreadyExists(String),

    /// The requested name would escape the vault or is not a plain filename.
    #[error("'{0}' is not a valid note name")]
    InvalidName(String),

    /// Any other file-system failure (permissions, disk, truncate/write).
    #[error("{op} '{name}': {source}")]
    Io {
        op: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },

    /// The vault directory cannot be created or read.
    #[error("vault directory {path:?} is unusable: {source}")]
    Startup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NoteError {
    pub(crate) fn io(op: &'static str, name: &str, source: io::Error) -> Self {
        NoteError::Io {
            op,
            name: name.to_string(),
            source,
        }
    }

    /// Like [`NoteError::io`], but a missing file becomes `NotFound`.
    pub(crate) fn lookup(op: &'static str, name: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            NoteError::NotFound(name.to_string())
        } else {
            NoteError::io(op, name, source)
        }
    }

    /// Collisions and bad names are user mistakes, not failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, NoteError::AlreadyExists(_) | NoteError::InvalidName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_maps_missing_file_to_not_found() {
        let err = NoteError::lookup("read", "gone.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, NoteError::NotFound(ref name) if name == "gone.md"));
    }

    #[test]
    fn test_lookup_keeps_other_kinds_as_io() {
        let err = NoteError::lookup(
            "read",
            "locked.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, NoteError::Io { op: "read", .. }));
        assert!(!err.is_warning());
    }

    #[test]
    fn test_collision_is_a_warning() {
        assert!(NoteError::AlreadyExists("a.md".into()).is_warning());
        assert!(NoteError::InvalidName("a/b".into()).is_warning());
        assert!(!NoteError::NotFound("a.md".into()).is_warning());
    }

    #[test]
    fn test_display_names_the_note() {
        let err = NoteError::AlreadyExists("todo.md".into());
        assert_eq!(err.to_string(), "note 'todo.md' already exists");
    }
}
