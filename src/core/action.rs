//! # Actions
//!
//! Everything the user can ask for becomes an `Action`, resolved once at
//! the input boundary. Ctrl+N? That's `Action::NewNote`. Enter? That's
//! `Action::Confirm`, whatever the current mode.
//!
//! `update()` takes the session, the vault and one action, applies the
//! transition for the current mode and returns an `Effect` telling the
//! adapter what to do next.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! | Action    | Idle     | Creating          | Browsing          | Editing            |
//! |-----------|----------|-------------------|-------------------|--------------------|
//! | NewNote   | Creating | Creating (reset)  | Creating          | Creating (release) |
//! | ShowList  | Browsing | Browsing          | Browsing (reload) | Browsing (release) |
//! | Confirm   | ignored  | create → Editing  | open → Editing    | ignored (newline)  |
//! | Save      | ignored  | ignored           | ignored           | persist → Idle     |
//! | Back      | ignored  | Idle              | Idle              | close → Idle       |
//! | Quit      | quit     | quit              | quit              | quit               |
//!
//! Failed creates, opens and saves leave the mode alone and set the status.

use log::{debug, info, warn};

use crate::core::buffer::NoteBuffer;
use crate::core::catalog;
use crate::core::error::NoteError;
use crate::core::state::{Mode, Session};
use crate::core::vault::Vault;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewNote,
    ShowList,
    Confirm,
    Save,
    Back,
    Quit,
    /// The active text widget now holds this text.
    TextEdited(String),
    /// The list widget moved its highlight to this row.
    Select(usize),
}

impl Action {
    /// Short name for logs; `TextEdited` may carry a whole note.
    pub fn name(&self) -> &'static str {
        match self {
            Action::NewNote => "NewNote",
            Action::ShowList => "ShowList",
            Action::Confirm => "Confirm",
            Action::Save => "Save",
            Action::Back => "Back",
            Action::Quit => "Quit",
            Action::TextEdited(_) => "TextEdited",
            Action::Select(_) => "Select",
        }
    }
}

/// What the adapter should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Handled; the mode did not change.
    None,
    /// Handled; widgets must be reloaded from the session.
    ModeChanged,
    /// Not a transition in this mode; hand the key to the active widget.
    Ignored,
    Quit,
}

pub fn update(session: &mut Session, vault: &Vault, action: Action) -> Effect {
    debug!("{} in {:?}", action.name(), session.kind());

    if action != Action::Back {
        session.discard_armed = false;
    }

    match action {
        Action::Quit => {
            info!("Quit requested in {:?}", session.kind());
            Effect::Quit
        }
        Action::NewNote => {
            warn_if_discarding(session);
            session.enter(Mode::Creating {
                draft: String::new(),
            });
            Effect::ModeChanged
        }
        Action::ShowList => show_list(session, vault),
        Action::Confirm => confirm(session, vault),
        Action::Save => save(session, vault),
        Action::Back => back(session),
        Action::TextEdited(text) => match session.mode_mut() {
            Mode::Creating { draft } => {
                *draft = text;
                Effect::None
            }
            Mode::Editing { note } => {
                note.set_text(text);
                Effect::None
            }
            _ => Effect::Ignored,
        },
        Action::Select(index) => match session.mode_mut() {
            Mode::Browsing { entries, selected } if index < entries.len() => {
                *selected = Some(index);
                Effect::None
            }
            _ => Effect::Ignored,
        },
    }
}

fn warn_if_discarding(session: &mut Session) {
    if let Some(note) = session.open_note()
        && note.is_dirty()
    {
        let name = note.name().to_string();
        warn!("Leaving {} with unsaved changes", name);
        session.status.warn(format!("Discarded unsaved changes to {name}"));
    }
}

fn show_list(session: &mut Session, vault: &Vault) -> Effect {
    match catalog::load(vault) {
        Ok(entries) => {
            warn_if_discarding(session);
            let selected = (!entries.is_empty()).then_some(0);
            info!("Showing {} notes", entries.len());
            session.enter(Mode::Browsing { entries, selected });
            Effect::ModeChanged
        }
        Err(e) => {
            warn!("Listing failed: {}", e);
            session.status.failure("Could not list notes", &e);
            Effect::None
        }
    }
}

fn confirm(session: &mut Session, vault: &Vault) -> Effect {
    match session.mode() {
        Mode::Creating { draft } => {
            let draft = draft.clone();
            create(session, vault, &draft)
        }
        Mode::Browsing { entries, selected } => {
            let Some(entry) = selected.and_then(|i| entries.get(i)) else {
                return Effect::None;
            };
            let name = entry.title.clone();
            open(session, vault, &name)
        }
        Mode::Idle | Mode::Editing { .. } => Effect::Ignored,
    }
}

fn create(session: &mut Session, vault: &Vault, draft: &str) -> Effect {
    if draft.trim().is_empty() {
        return Effect::None;
    }

    let name = match vault.canonical_name(draft) {
        Ok(name) => name,
        Err(e) => {
            session.status.failure("Could not create note", &e);
            return Effect::None;
        }
    };

    match vault.create_note(&name) {
        Ok(handle) => {
            session.status.success(format!("Created new note: {name}"));
            session.enter(Mode::Editing {
                note: NoteBuffer::new(handle, String::new()),
            });
            Effect::ModeChanged
        }
        Err(NoteError::AlreadyExists(_)) => {
            info!("Refusing to overwrite {}", name);
            session.status.warn(format!("File '{name}' already exists!"));
            Effect::None
        }
        Err(e) => {
            warn!("Create failed: {}", e);
            session.status.error(format!("Error creating file: {e}"));
            Effect::None
        }
    }
}

fn open(session: &mut Session, vault: &Vault, name: &str) -> Effect {
    match NoteBuffer::open(vault, name) {
        Ok(note) => {
            session.status.info(format!("Editing {name}"));
            session.enter(Mode::Editing { note });
            Effect::ModeChanged
        }
        Err(e) => {
            warn!("Open of {} failed: {}", name, e);
            session.status.failure(&format!("Could not open {name}"), &e);
            Effect::None
        }
    }
}

/// On failure the note stays open with its edits; saving again retries.
fn save(session: &mut Session, vault: &Vault) -> Effect {
    let Mode::Editing { note } = session.mode_mut() else {
        return Effect::Ignored;
    };
    let name = note.name().to_string();

    match note.save(vault) {
        Ok(()) => {
            session.status.success(format!("Saved {name}"));
            session.enter(Mode::Idle);
            Effect::ModeChanged
        }
        Err(e) => {
            warn!("Save of {} failed: {}", name, e);
            session.status.error(format!("Could not save {name}: {e}"));
            Effect::None
        }
    }
}

fn back(session: &mut Session) -> Effect {
    match session.mode() {
        Mode::Idle => Effect::Ignored,
        Mode::Creating { .. } | Mode::Browsing { .. } => {
            session.enter(Mode::Idle);
            Effect::ModeChanged
        }
        Mode::Editing { note } => {
            let name = note.name().to_string();
            let dirty = note.is_dirty();

            if dirty && !session.discard_armed {
                session.discard_armed = true;
                session
                    .status
                    .warn(format!("Unsaved changes in {name}. Save, or go back again to discard"));
                return Effect::None;
            }

            if dirty {
                session.status.warn(format!("Discarded unsaved changes to {name}"));
            } else {
                session.status.info(format!("Closed {name}"));
            }
            session.enter(Mode::Idle);
            Effect::ModeChanged
        }
    }
}
