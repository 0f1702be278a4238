//! # TitleBar Component
//!
//! Single top line: app name, the active mode and the vault location.
//!
//! ## Props-in-Struct Pattern
//!
//! Props are struct fields rather than render() parameters so the bar fits
//! the fixed `Component::render` signature. The bar has no state of its own.
//!
//! ```text
//! terminal-note | Editing | ~/.terminal-note
//! terminal-note | ~/.terminal-note            (Idle)
//! ```

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::ModeKind;
use crate::tui::component::Component;

pub struct TitleBar {
    pub app_name: String,
    pub mode: ModeKind,
    pub vault: String,
}

impl TitleBar {
    pub fn new(app_name: &str, mode: ModeKind, vault: &Path) -> Self {
        Self {
            app_name: app_name.to_string(),
            mode,
            vault: vault.display().to_string(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![Span::styled(
            self.app_name.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if self.mode != ModeKind::Idle {
            spans.push(Span::styled(" | ", dim));
            spans.push(Span::styled(
                self.mode.label(),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(" | ", dim));
        spans.push(Span::styled(self.vault.as_str(), dim));

        frame.render_widget(Line::from(spans), area);
    }
}
