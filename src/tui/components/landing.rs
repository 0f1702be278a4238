//! # Landing Page Component
//!
//! Welcome screen shown while the session is idle.

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::APP_NAME;
use crate::tui::component::Component;

pub struct LandingPage {
    vault: String,
}

impl LandingPage {
    pub fn new(vault: &Path) -> Self {
        Self {
            vault: vault.display().to_string(),
        }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Cyan);

        let text_lines = vec![
            Line::from(Span::styled(
                format!("welcome to {APP_NAME} 🧠"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("v{}", env!("CARGO_PKG_VERSION")), dim)),
            Line::default(),
            Line::from(vec![Span::styled("notes live in ", dim), Span::raw(self.vault.as_str())]),
            Line::default(),
            Line::from(vec![Span::styled("Ctrl+N", key), Span::styled("  new note", dim)]),
            Line::from(vec![Span::styled("Ctrl+L", key), Span::styled("  list notes", dim)]),
            Line::from(vec![Span::styled("Ctrl+Q", key), Span::styled("  quit", dim)]),
        ];

        let [centered] = Layout::vertical([Constraint::Length(text_lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            centered,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_shows_welcome_and_vault() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| LandingPage::new(Path::new("/tmp/vault")).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(text.contains("welcome to terminal-note"));
        assert!(text.contains("/tmp/vault"));
        assert!(text.contains("Ctrl+N"));
    }
}
