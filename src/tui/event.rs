use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Semantic keys (resolved into core::Action)
    NewNote,  // Ctrl+N
    ShowList, // Ctrl+L
    Save,     // Ctrl+S
    Quit,     // Ctrl+Q
    Submit,   // Enter: confirm, or newline in the editor
    Escape,   // Esc: back / close

    // Widget keys (handled by the active text field, editor or list)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    WordLeft,
    WordRight,
    PageUp,
    PageDown,

    Resize,
}

impl TuiEvent {
    /// The mode-level action this key stands for, if any.
    pub fn action(&self) -> Option<Action> {
        match self {
            TuiEvent::NewNote => Some(Action::NewNote),
            TuiEvent::ShowList => Some(Action::ShowList),
            TuiEvent::Save => Some(Action::Save),
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Submit => Some(Action::Confirm),
            TuiEvent::Escape => Some(Action::Back),
            _ => None,
        }
    }
}

/// Block until the next terminal event. Returns `None` for events the UI
/// does not care about (key releases, focus changes, mouse).
pub fn read_event() -> io::Result<Option<TuiEvent>> {
    Ok(match event::read()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => map_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'n' => Some(TuiEvent::NewNote),
            'l' => Some(TuiEvent::ShowList),
            's' => Some(TuiEvent::Save),
            'q' => Some(TuiEvent::Quit),
            _ => None,
        },
        KeyCode::Char(_) if alt => None,
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Left if ctrl || alt => Some(TuiEvent::WordLeft),
        KeyCode::Right if ctrl || alt => Some(TuiEvent::WordRight),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::PageUp => Some(TuiEvent::PageUp),
        KeyCode::PageDown => Some(TuiEvent::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<TuiEvent> {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_control_keys_map_to_commands() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(key(KeyCode::Char('n'), ctrl), Some(TuiEvent::NewNote));
        assert_eq!(key(KeyCode::Char('l'), ctrl), Some(TuiEvent::ShowList));
        assert_eq!(key(KeyCode::Char('s'), ctrl), Some(TuiEvent::Save));
        assert_eq!(key(KeyCode::Char('q'), ctrl), Some(TuiEvent::Quit));
        assert_eq!(key(KeyCode::Char('x'), ctrl), None);
    }

    #[test]
    fn test_plain_letters_are_text() {
        // 'q' alone must stay typeable.
        assert_eq!(
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(TuiEvent::InputChar('q'))
        );
        assert_eq!(
            key(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            Some(TuiEvent::InputChar('Q'))
        );
        assert_eq!(key(KeyCode::Char('b'), KeyModifiers::ALT), None);
    }

    #[test]
    fn test_word_motion_needs_modifier() {
        assert_eq!(key(KeyCode::Left, KeyModifiers::CONTROL), Some(TuiEvent::WordLeft));
        assert_eq!(key(KeyCode::Right, KeyModifiers::ALT), Some(TuiEvent::WordRight));
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), Some(TuiEvent::CursorLeft));
    }

    #[test]
    fn test_each_action_has_one_key() {
        let semantic = [
            TuiEvent::NewNote,
            TuiEvent::ShowList,
            TuiEvent::Submit,
            TuiEvent::Save,
            TuiEvent::Escape,
            TuiEvent::Quit,
        ];
        let actions: Vec<Action> = semantic.iter().filter_map(TuiEvent::action).collect();
        assert_eq!(
            actions,
            vec![
                Action::NewNote,
                Action::ShowList,
                Action::Confirm,
                Action::Save,
                Action::Back,
                Action::Quit
            ]
        );
        assert_eq!(TuiEvent::InputChar('a').action(), None);
        assert_eq!(TuiEvent::CursorDown.action(), None);
    }
}
