//! # StatusBar Component
//!
//! Two bottom lines: key hints for the active mode, then the last status
//! message from the session.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::ModeKind;
use crate::tui::component::Component;

/// Key hints for each mode.
pub fn help_text(mode: ModeKind) -> &'static str {
    match mode {
        ModeKind::Idle => "Ctrl+N new note · Ctrl+L list notes · Ctrl+Q quit",
        ModeKind::Creating => "Enter create · Esc cancel · Ctrl+Q quit",
        ModeKind::Browsing => "↑/↓ select · Enter open · Ctrl+N new · Esc back · Ctrl+Q quit",
        ModeKind::Editing => "Ctrl+S save · Esc back · Ctrl+Q quit",
    }
}

pub struct StatusBar<'a> {
    pub mode: ModeKind,
    pub message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: ModeKind, message: Option<&'a str>) -> Self {
        Self { mode, message }
    }

    /// Rows needed below the main area.
    pub const HEIGHT: u16 = 2;
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [help_area, status_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Line::styled(help_text(self.mode), Style::default().fg(Color::DarkGray)),
            help_area,
        );
        if let Some(message) = self.message {
            frame.render_widget(Line::raw(message), status_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_text_differs_per_mode() {
        assert!(help_text(ModeKind::Editing).contains("Ctrl+S"));
        assert!(help_text(ModeKind::Creating).contains("Enter"));
        assert!(!help_text(ModeKind::Idle).contains("Ctrl+S"));
    }

    #[test]
    fn test_status_bar_renders_message_below_help() {
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();
        terminal
            .draw(|f| StatusBar::new(ModeKind::Idle, Some("Saved todo.md")).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..80).map(|x| buffer[(x, y)].symbol()).collect() };

        assert!(row(0).contains("Ctrl+N new note"));
        assert!(row(1).contains("Saved todo.md"));
    }
}
