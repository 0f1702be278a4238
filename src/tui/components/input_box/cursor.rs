//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and the
//! viewport size seen at the last render. Navigation methods take the
//! buffer explicitly since the text itself belongs to `InputBox`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::text_wrap::{TEXT_OFFSET_X, TEXT_OFFSET_Y, inner_width, line_of, line_spans};

pub(super) struct CursorState {
    /// Byte offset in the buffer (0..=buffer.len()), always on a char boundary
    pub pos: usize,
    /// First wrapped line shown in the viewport
    pub scroll_offset: u16,
    /// Outer width from the last render, used for vertical movement
    pub last_content_width: u16,
    /// Text rows available at the last render, used for paging
    pub last_visible_lines: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
            last_visible_lines: 1,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    /// Moves one wrapped line up (`direction < 0`) or down, keeping the
    /// display column where the target line is long enough.
    ///
    /// Returns `false` when already on the first or last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 {
            return false;
        }

        let spans = line_spans(buffer, width);
        let current = line_of(&spans, self.pos);
        let target = if direction < 0 {
            match current.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        } else {
            if current + 1 >= spans.len() {
                return false;
            }
            current + 1
        };

        let start = spans[current].start;
        let column = buffer[start..self.pos.max(start)].width();

        let span = spans[target].clone();
        let mut pos = span.start;
        let mut used = 0;
        for (i, c) in buffer[span.clone()].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > column {
                break;
            }
            used += w;
            pos = span.start + i + c.len_utf8();
        }
        self.pos = pos;
        true
    }

    /// Moves up to `lines` wrapped lines; `true` if the cursor moved at all.
    pub fn move_page(&mut self, buffer: &str, direction: i16, content_width: u16, lines: u16) -> bool {
        let mut moved = false;
        for _ in 0..lines.max(1) {
            if !self.move_vertically(buffer, direction, content_width) {
                break;
            }
            moved = true;
        }
        moved
    }

    /// Wrapped line (0-based) holding the cursor.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        line_of(&line_spans(buffer, width), self.pos) as u16
    }

    /// Keeps the cursor line inside a viewport of `visible_lines` rows.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16, visible_lines: u16) {
        let visible_lines = visible_lines.max(1);
        let width = inner_width(content_width);
        let total_lines = line_spans(buffer, width).len() as u16;

        if total_lines <= visible_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible_lines {
            self.scroll_offset = cursor_line + 1 - visible_lines;
        }
        self.scroll_offset = self.scroll_offset.min(total_lines - visible_lines);
    }

    /// Screen cell (column, row) for the terminal cursor.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let origin = (area.x + TEXT_OFFSET_X, area.y + TEXT_OFFSET_Y);
        if width == 0 {
            return origin;
        }

        let spans = line_spans(buffer, width);
        let line = line_of(&spans, self.pos);
        let start = spans[line].start;
        let column = (buffer[start..self.pos.max(start)].width() as u16).min(width);
        let row = (line as u16).saturating_sub(self.scroll_offset);

        (origin.0 + column, origin.1 + row)
    }
}
