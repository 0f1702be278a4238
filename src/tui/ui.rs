use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::APP_NAME;
use crate::core::buffer::NoteBuffer;
use crate::core::state::{Mode, Session};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, NoteList, StatusBar, TitleBar};

/// Filename prompt: one text row plus borders
const PROMPT_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, vault_root: &Path) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(StatusBar::HEIGHT)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    TitleBar::new(APP_NAME, session.kind(), vault_root).render(frame, title_area);

    match session.mode() {
        Mode::Idle => LandingPage::new(vault_root).render(frame, main_area),
        Mode::Creating { .. } => {
            let [prompt_area, _] = Layout::vertical([Length(PROMPT_HEIGHT), Min(0)]).areas(main_area);
            tui.filename.render(frame, prompt_area);
        }
        Mode::Browsing { entries, .. } => {
            NoteList::new(entries, &mut tui.note_list).render(frame, main_area);
        }
        Mode::Editing { note } => {
            tui.editor.title = editor_title(note);
            tui.editor.render(frame, main_area);
        }
    }

    StatusBar::new(session.kind(), session.status.message()).render(frame, status_area);
}

/// Note name, marked with `[+]` while it has unsaved edits.
fn editor_title(note: &NoteBuffer) -> String {
    if note.is_dirty() {
        format!(" {} [+] ", note.name())
    } else {
        format!(" {} ", note.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::temp_vault;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(session: &Session, tui: &mut TuiState, root: &Path) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal
            .draw(|f| draw_ui(f, session, tui, root))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_shows_landing_and_help() {
        let (_dir, vault) = temp_vault();
        let session = Session::new();
        let mut tui = TuiState::new();
        let text = screen(&session, &mut tui, vault.root());
        assert!(text.contains("welcome to terminal-note"));
        assert!(text.contains("Ctrl+N new note"));
    }

    #[test]
    fn test_editor_title_marks_unsaved_edits() {
        let (_dir, vault) = temp_vault();
        let mut session = Session::new();
        let mut tui = TuiState::new();
        update(&mut session, &vault, Action::NewNote);
        update(&mut session, &vault, Action::TextEdited("todo".to_string()));
        update(&mut session, &vault, Action::Confirm);
        tui.sync(&session);

        let text = screen(&session, &mut tui, vault.root());
        assert!(text.contains("todo.md"));
        assert!(!text.contains("[+]"));
        assert!(text.contains("Created new note: todo.md"));

        update(&mut session, &vault, Action::TextEdited("draft".to_string()));
        tui.sync(&session);
        let text = screen(&session, &mut tui, vault.root());
        assert!(text.contains("todo.md [+]"));
        assert!(text.contains("draft"));
    }

    #[test]
    fn test_browsing_lists_notes() {
        let (dir, vault) = temp_vault();
        std::fs::write(dir.path().join("ideas.md"), "x").unwrap();
        let mut session = Session::new();
        let mut tui = TuiState::new();
        update(&mut session, &vault, Action::ShowList);
        tui.sync(&session);

        let text = screen(&session, &mut tui, vault.root());
        assert!(text.contains("All Notes"));
        assert!(text.contains("ideas.md"));
        assert!(text.contains("Modified: "));
    }
}
