//! # Note List Component
//!
//! Browsable list of vault notes, shown while the session is `Browsing`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NoteListState` lives in `TuiState` and keeps the highlight and offset
//! - `NoteList` is created each frame with the session's entries borrowed
//!
//! The selection itself belongs to the session. Navigation keys only emit
//! [`ListEvent::Select`]; the highlight follows once the session accepts it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::ListEntry;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const EMPTY_MESSAGE: &str = "No notes yet. Press Ctrl+N to create one.";
/// Rows per entry: title and description
const ITEM_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Select(usize),
}

/// Persistent state for the note list.
#[derive(Debug, Default)]
pub struct NoteListState {
    pub list_state: ListState,
    len: usize,
    /// Entries that fit on screen at the last render
    page: usize,
}

impl NoteListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the session's selection and entry count.
    pub fn sync(&mut self, selected: Option<usize>, len: usize) {
        self.len = len;
        self.list_state.select(selected.filter(|&i| i < len));
        if len == 0 {
            *self.list_state.offset_mut() = 0;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn target(&self, event: &TuiEvent) -> Option<usize> {
        let last = self.len.checked_sub(1)?;
        let current = self.selected();
        let page = self.page.max(1);
        let target = match (event, current) {
            (TuiEvent::CursorUp, Some(i)) => i.saturating_sub(1),
            (TuiEvent::CursorDown, Some(i)) => (i + 1).min(last),
            (TuiEvent::PageUp, Some(i)) => i.saturating_sub(page),
            (TuiEvent::PageDown, Some(i)) => (i + page).min(last),
            (TuiEvent::CursorUp | TuiEvent::PageUp | TuiEvent::CursorHome, _) => 0,
            (TuiEvent::CursorDown | TuiEvent::PageDown, None) => 0,
            (TuiEvent::CursorEnd, _) => last,
            _ => return None,
        };
        Some(target)
    }
}

impl EventHandler for NoteListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let target = self.target(event)?;
        (Some(target) != self.selected()).then_some(ListEvent::Select(target))
    }
}

/// Transient render wrapper for the note list.
pub struct NoteList<'a> {
    entries: &'a [ListEntry],
    state: &'a mut NoteListState,
}

impl<'a> NoteList<'a> {
    pub fn new(entries: &'a [ListEntry], state: &'a mut NoteListState) -> Self {
        Self { entries, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" All Notes ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        if self.entries.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;
        self.state.page = (area.height.saturating_sub(2) / ITEM_HEIGHT).max(1) as usize;

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate_str(&entry.title, inner_width.saturating_sub(2)),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate_str(&entry.description, inner_width.saturating_sub(2)),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("│ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` display columns, ending in "..." when cut.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
