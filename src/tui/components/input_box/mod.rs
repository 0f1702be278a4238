//! # InputBox Component
//!
//! Editable text area used twice: a one-line filename prompt while creating
//! a note, and the multi-line editor while a note is open.
//!
//! ## State Management
//!
//! The buffer is internal state mirrored into the session through
//! [`InputEvent::Edited`]. Title and placeholder are props set by the
//! parent. Cursor position and scroll live in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{
    Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    VERTICAL_OVERHEAD, inner_width, line_spans, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Buffer content changed
    Edited,
    /// Only the cursor moved
    Moved,
}

pub struct InputBox {
    pub buffer: String,
    /// Border title (Prop)
    pub title: String,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: String,
    multiline: bool,
    cursor: CursorState,
}

impl InputBox {
    fn new(title: &str, placeholder: &str, multiline: bool) -> Self {
        Self {
            buffer: String::new(),
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            multiline,
            cursor: CursorState::new(),
        }
    }

    /// One line of input; Enter is left to the parent.
    pub fn single_line(title: &str, placeholder: &str) -> Self {
        Self::new(title, placeholder, false)
    }

    /// Free text; Enter inserts a newline.
    pub fn multi_line(title: &str, placeholder: &str) -> Self {
        Self::new(title, placeholder, true)
    }

    /// Replaces the content and parks the cursor after the last character.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor.reset();
        self.cursor.move_to_end(&self.buffer);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// Height needed to show the whole buffer, borders included.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        wrap_line_count(&self.buffer, inner_width(content_width)) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        let text = if self.multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
        };
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
        Some(InputEvent::Edited)
    }

    fn move_to(&mut self, pos: usize) -> Option<InputEvent> {
        (self.cursor.pos != pos).then(|| {
            self.cursor.pos = pos;
            InputEvent::Moved
        })
    }

    fn visible_text(&self, content_width: u16, visible_lines: u16) -> Text<'_> {
        if self.buffer.is_empty() {
            return Text::from(Line::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let spans = line_spans(&self.buffer, inner_width(content_width));
        let lines: Vec<Line> = spans
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(visible_lines as usize)
            .map(|span| Line::raw(&self.buffer[span]))
            .collect();
        Text::from(lines)
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect, visible_lines: u16) {
        let total_lines = wrap_line_count(&self.buffer, inner_width(area.width));
        if total_lines <= visible_lines {
            return;
        }

        // content_length is the max scroll position, not the line count
        let max_scroll = total_lines.saturating_sub(visible_lines);
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(VERTICAL_OVERHEAD),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible_lines = if self.multiline {
            area.height.saturating_sub(VERTICAL_OVERHEAD).max(1)
        } else {
            1
        };
        self.cursor.last_content_width = area.width;
        self.cursor.last_visible_lines = visible_lines;
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, visible_lines);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title(self.title.as_str())
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        let input = Paragraph::new(self.visible_text(area.width, visible_lines))
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);
        self.render_scrollbar(frame, area, visible_lines);

        frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let width = self.cursor.last_content_width;
        let page = self.cursor.last_visible_lines;

        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Submit if self.multiline => self.insert("\n"),
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::Edited)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::Edited)
            }
            TuiEvent::CursorLeft if self.cursor.pos > 0 => {
                self.move_to(prev_char_boundary(&self.buffer, self.cursor.pos))
            }
            TuiEvent::CursorRight if self.cursor.pos < self.buffer.len() => {
                self.move_to(next_char_boundary(&self.buffer, self.cursor.pos))
            }
            TuiEvent::WordLeft => self.move_to(prev_word_boundary(&self.buffer, self.cursor.pos)),
            TuiEvent::WordRight => self.move_to(next_word_boundary(&self.buffer, self.cursor.pos)),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.move_to(line_start)
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                self.move_to(line_end)
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, width)
                .then_some(InputEvent::Moved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, width)
                .then_some(InputEvent::Moved),
            TuiEvent::PageUp => self
                .cursor
                .move_page(&self.buffer, -1, width, page)
                .then_some(InputEvent::Moved),
            TuiEvent::PageDown => self
                .cursor
                .move_page(&self.buffer, 1, width, page)
                .then_some(InputEvent::Moved),
            _ => None,
        }
    }
}
