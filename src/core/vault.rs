//! # Vault Store
//!
//! Owns the on-disk notes directory. Every note is a plain file directly
//! inside the vault; its filename is its identity.
//!
//! ```text
//! ~/.terminal-note/
//! ├── todo.md
//! ├── ideas.md
//! └── scratch.txt      // placed by hand, still listed and editable
//! ```
//!
//! All operations are synchronous. The vault is created proactively by
//! [`Vault::open`], so a later listing failure means the directory was
//! removed or locked from outside the session.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, info, warn};

use crate::core::config::VaultConfig;
use crate::core::error::{NoteError, NoteResult};

/// Permissions for a freshly created vault directory.
#[cfg(unix)]
const VAULT_DIR_MODE: u32 = 0o750;

/// One regular file found in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMeta {
    pub name: String,
    pub modified: SystemTime,
}

/// Writable handle on a note file, exclusively owned by whoever opened it.
///
/// Dropping the handle closes the file.
#[derive(Debug)]
pub struct NoteHandle {
    name: String,
    file: File,
}

impl NoteHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub(crate) fn from_file(name: &str, file: File) -> Self {
        Self {
            name: name.to_string(),
            file,
        }
    }
}

#[derive(Debug)]
pub struct Vault {
    config: VaultConfig,
}

impl Vault {
    /// Creates the vault directory if needed and checks that it can be read.
    pub fn open(config: VaultConfig) -> NoteResult<Self> {
        let root = config.root.clone();
        let startup = |source: io::Error| NoteError::Startup {
            path: root.clone(),
            source,
        };

        if !root.is_dir() {
            create_vault_dir(&root).map_err(startup)?;
            info!("Created vault directory {}", root.display());
        }
        fs::read_dir(&root).map_err(startup)?;

        info!("Using vault {}", root.display());
        Ok(Self { config })
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn note_path(&self, name: &str) -> PathBuf {
        self.config.root.join(name)
    }

    /// Turns a draft typed by the user into the note's filename.
    ///
    /// Surrounding whitespace is dropped and the configured extension is
    /// always appended, so `todo` becomes `todo.md`.
    pub fn canonical_name(&self, draft: &str) -> NoteResult<String> {
        let base = draft.trim();
        if base.is_empty()
            || base == "."
            || base == ".."
            || base.contains(['/', '\\', '\0'])
        {
            return Err(NoteError::InvalidName(base.to_string()));
        }
        Ok(format!("{base}.{}", self.config.extension))
    }

    /// Regular files directly inside the vault, in directory order.
    pub fn list_notes(&self) -> NoteResult<Vec<NoteMeta>> {
        let root = self.root();
        let entries = fs::read_dir(root)
            .map_err(|e| NoteError::io("list", &root.display().to_string(), e))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable vault entry: {}", e);
                    continue;
                }
            };
            // Follows symlinks; a link to a directory is still a directory.
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping non UTF-8 filename {:?}", entry.file_name());
                continue;
            };
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            notes.push(NoteMeta { name, modified });
        }

        debug!("Listed {} notes in {}", notes.len(), root.display());
        Ok(notes)
    }

    pub fn read_note(&self, name: &str) -> NoteResult<String> {
        fs::read_to_string(self.note_path(name)).map_err(|e| NoteError::lookup("read", name, e))
    }

    /// Creates an empty note. Fails with `AlreadyExists` instead of
    /// touching a file that is already there.
    pub fn create_note(&self, name: &str) -> NoteResult<NoteHandle> {
        let path = self.note_path(name);
        if path.exists() {
            return Err(NoteError::AlreadyExists(name.to_string()));
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => NoteError::AlreadyExists(name.to_string()),
                _ => NoteError::io("create", name, e),
            })?;

        info!("Created note {}", path.display());
        Ok(NoteHandle {
            name: name.to_string(),
            file,
        })
    }

    pub fn open_for_edit(&self, name: &str) -> NoteResult<NoteHandle> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.note_path(name))
            .map_err(|e| NoteError::lookup("open", name, e))?;

        debug!("Opened {} for editing", name);
        Ok(NoteHandle {
            name: name.to_string(),
            file,
        })
    }

    /// Replaces the file's content with `content`, byte for byte.
    ///
    /// Truncates before writing so a shorter text never leaves a stale
    /// tail. The first failing step aborts the rest. The handle stays with
    /// the caller either way; it is closed when the caller drops it.
    pub fn persist(&self, handle: &mut NoteHandle, content: &str) -> NoteResult<()> {
        let name = handle.name.clone();
        let file = &mut handle.file;

        file.set_len(0).map_err(|e| NoteError::io("truncate", &name, e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| NoteError::io("seek", &name, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| NoteError::io("write", &name, e))?;
        file.sync_all().map_err(|e| NoteError::io("sync", &name, e))?;

        info!("Saved {} ({} bytes)", name, content.len());
        Ok(())
    }
}

#[cfg(unix)]
fn create_vault_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(VAULT_DIR_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_vault_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
