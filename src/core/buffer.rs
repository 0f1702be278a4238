//! In-memory text of the one note open for editing, plus the handle
//! needed to write it back.

use log::debug;

use crate::core::error::NoteResult;
use crate::core::vault::{NoteHandle, Vault};

#[derive(Debug)]
pub struct NoteBuffer {
    handle: NoteHandle,
    text: String,
    dirty: bool,
}

impl NoteBuffer {
    pub fn new(handle: NoteHandle, text: String) -> Self {
        Self {
            handle,
            text,
            dirty: false,
        }
    }

    /// Reads an existing note and takes a write handle on it.
    pub fn open(vault: &Vault, name: &str) -> NoteResult<Self> {
        let text = vault.read_note(name)?;
        let handle = vault.open_for_edit(name)?;
        Ok(Self::new(handle, text))
    }

    pub fn name(&self) -> &str {
        self.handle.name()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while the text differs from what was last read or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_text(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.dirty = true;
        }
    }

    /// Writes the full current text over the file.
    pub fn save(&mut self, vault: &Vault) -> NoteResult<()> {
        vault.persist(&mut self.handle, &self.text)?;
        self.dirty = false;
        Ok(())
    }

    /// Closes the file. Unsaved text is gone after this.
    pub fn release(self) {
        debug!(
            "Releasing {} (unsaved changes: {})",
            self.handle.name(),
            self.dirty
        );
    }
}
