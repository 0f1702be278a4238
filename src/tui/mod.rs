//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the session,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! key → TuiEvent ─┬─ has an Action? → update() ─┬─ Quit        → leave loop
//!                 │                             ├─ ModeChanged → reload widgets
//!                 │                             ├─ None        → done
//!                 │                             └─ Ignored ──┐
//!                 └─ widget key ─────────────────────────────┴→ active widget
//!                                                  └→ TextEdited / Select → update()
//! ```
//!
//! Widgets own cursor and scroll state only. Every text change is mirrored
//! into the session right away, so the session always holds what is shown.
//!
//! The loop blocks on input and redraws after every event; nothing animates.
//! A `SteadyBlock` cursor style avoids the blink timer reset that ratatui's
//! `set_cursor_position` causes on each `draw()`.

mod component;
mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::ops::ControlFlow;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{ModeKind, Session};
use crate::core::vault::Vault;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ListEvent, NoteListState};
use crate::tui::event::{TuiEvent, read_event};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Filename prompt while creating
    pub filename: InputBox,
    /// Body of the open note
    pub editor: InputBox,
    pub note_list: NoteListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            filename: InputBox::single_line(" New note ", "Enter filename..."),
            editor: InputBox::multi_line(" Editor ", "Start typing..."),
            note_list: NoteListState::new(),
        }
    }

    /// Reloads every widget from the session after a mode change.
    pub fn sync(&mut self, session: &Session) {
        match session.draft() {
            Some(draft) => self.filename.set_text(draft),
            None => self.filename.clear(),
        }
        match session.open_note() {
            Some(note) => self.editor.set_text(note.text()),
            None => self.editor.clear(),
        }
        self.sync_list(session);
    }

    fn sync_list(&mut self, session: &Session) {
        self.note_list
            .sync(session.selected(), session.entries().len());
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Runs the interactive session until the user quits.
pub fn run(vault: &Vault) -> io::Result<()> {
    let mut session = Session::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut session, vault, &mut tui));
    ratatui::restore();

    if let Some(note) = session.open_note() {
        info!("Quitting with {} still open", note.name());
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    vault: &Vault,
    tui: &mut TuiState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, session, tui, vault.root()))?;

        let Some(event) = read_event()? else {
            continue;
        };
        if dispatch(session, vault, tui, event).is_break() {
            info!("Leaving event loop");
            return Ok(());
        }
    }
}

/// Routes one event through the session and the active widget.
pub(crate) fn dispatch(
    session: &mut Session,
    vault: &Vault,
    tui: &mut TuiState,
    event: TuiEvent,
) -> ControlFlow<()> {
    // Resize just needs the redraw the loop does anyway
    if event == TuiEvent::Resize {
        return ControlFlow::Continue(());
    }

    if let Some(action) = event.action() {
        match update(session, vault, action) {
            Effect::Quit => return ControlFlow::Break(()),
            Effect::ModeChanged => {
                tui.sync(session);
                return ControlFlow::Continue(());
            }
            Effect::None => {
                tui.sync_list(session);
                return ControlFlow::Continue(());
            }
            Effect::Ignored => debug!("{:?} forwarded to the {:?} view", event, session.kind()),
        }
    }

    let follow_up = match session.kind() {
        ModeKind::Creating => edited(&mut tui.filename, &event),
        ModeKind::Editing => edited(&mut tui.editor, &event),
        ModeKind::Browsing => tui
            .note_list
            .handle_event(&event)
            .map(|ListEvent::Select(index)| Action::Select(index)),
        ModeKind::Idle => None,
    };

    if let Some(action) = follow_up {
        if update(session, vault, action) == Effect::Quit {
            return ControlFlow::Break(());
        }
        tui.sync_list(session);
    }
    ControlFlow::Continue(())
}

/// Lets `input` handle the key; a content change becomes `TextEdited`.
fn edited(input: &mut InputBox, event: &TuiEvent) -> Option<Action> {
    match input.handle_event(event)? {
        InputEvent::Edited => Some(Action::TextEdited(input.buffer.clone())),
        InputEvent::Moved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_vault;
    use std::fs;

    struct Harness {
        _dir: tempfile::TempDir,
        vault: Vault,
        session: Session,
        tui: TuiState,
    }

    impl Harness {
        fn new() -> Self {
            let (dir, vault) = temp_vault();
            Self {
                _dir: dir,
                vault,
                session: Session::new(),
                tui: TuiState::new(),
            }
        }

        fn send(&mut self, event: TuiEvent) -> ControlFlow<()> {
            dispatch(&mut self.session, &self.vault, &mut self.tui, event)
        }

        fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                assert!(self.send(TuiEvent::InputChar(c)).is_continue());
            }
        }
    }

    #[test]
    fn test_create_type_and_save() {
        let mut h = Harness::new();
        h.send(TuiEvent::NewNote);
        h.type_str("todo");
        assert_eq!(h.session.draft(), Some("todo"));

        h.send(TuiEvent::Submit);
        assert_eq!(h.session.kind(), ModeKind::Editing);
        assert!(h.tui.editor.buffer.is_empty());

        h.type_str("buy milk");
        h.send(TuiEvent::Submit);
        h.type_str("call mom");
        assert_eq!(h.session.open_note().unwrap().text(), "buy milk\ncall mom");

        h.send(TuiEvent::Save);
        assert_eq!(h.session.kind(), ModeKind::Idle);
        assert_eq!(
            fs::read_to_string(h.vault.note_path("todo.md")).unwrap(),
            "buy milk\ncall mom"
        );
        assert_eq!(h.session.status.message(), Some("✅ Saved todo.md"));
    }

    #[test]
    fn test_backspace_in_prompt_updates_draft() {
        let mut h = Harness::new();
        h.send(TuiEvent::NewNote);
        h.type_str("tod");
        h.send(TuiEvent::Backspace);
        assert_eq!(h.session.draft(), Some("to"));
        h.send(TuiEvent::CursorLeft);
        assert_eq!(h.session.draft(), Some("to"));
    }

    #[test]
    fn test_browse_and_open_second_note() {
        let mut h = Harness::new();
        fs::write(h.vault.note_path("a.md"), "alpha").unwrap();
        fs::write(h.vault.note_path("b.md"), "beta").unwrap();

        h.send(TuiEvent::ShowList);
        assert_eq!(h.session.kind(), ModeKind::Browsing);
        assert_eq!(h.tui.note_list.selected(), Some(0));

        h.send(TuiEvent::CursorDown);
        assert_eq!(h.session.selected(), Some(1));
        assert_eq!(h.tui.note_list.selected(), Some(1));

        let expected = h.session.entries()[1].title.clone();
        h.send(TuiEvent::Submit);
        let note = h.session.open_note().unwrap();
        assert_eq!(note.name(), expected);
        assert_eq!(h.tui.editor.buffer, note.text());
    }

    #[test]
    fn test_escape_twice_discards_edits() {
        let mut h = Harness::new();
        fs::write(h.vault.note_path("a.md"), "keep").unwrap();
        h.send(TuiEvent::ShowList);
        h.send(TuiEvent::Submit);
        h.type_str("!");

        h.send(TuiEvent::Escape);
        assert_eq!(h.session.kind(), ModeKind::Editing);
        h.send(TuiEvent::Escape);
        assert_eq!(h.session.kind(), ModeKind::Idle);
        assert!(h.tui.editor.buffer.is_empty());
        assert_eq!(fs::read_to_string(h.vault.note_path("a.md")).unwrap(), "keep");
    }

    #[test]
    fn test_quit_from_every_mode() {
        let setups: [&[TuiEvent]; 4] = [
            &[],
            &[TuiEvent::NewNote],
            &[TuiEvent::ShowList],
            &[TuiEvent::NewNote, TuiEvent::InputChar('x'), TuiEvent::Submit],
        ];
        for setup in setups {
            let mut h = Harness::new();
            for event in setup {
                h.send(event.clone());
            }
            assert!(h.send(TuiEvent::Quit).is_break());
        }
    }

    #[test]
    fn test_resize_and_idle_keys_do_nothing() {
        let mut h = Harness::new();
        assert!(h.send(TuiEvent::Resize).is_continue());
        assert!(h.send(TuiEvent::InputChar('a')).is_continue());
        assert!(h.send(TuiEvent::Submit).is_continue());
        assert!(h.send(TuiEvent::Escape).is_continue());
        assert_eq!(h.session.kind(), ModeKind::Idle);
    }
}
