//! Stateless wrapping helpers and layout constants for the InputBox.

use std::ops::Range;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Columns from the area's left edge to the first text cell (border + padding)
pub(super) const TEXT_OFFSET_X: u16 = 2;
/// Rows from the area's top edge to the first text line (border)
pub(super) const TEXT_OFFSET_Y: u16 = 1;

/// Build textwrap options for the given inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after border/padding overhead; 0 if too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped lines of `text`, with an explicit empty last line when the
/// text ends in a newline.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    lines
}

pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 1;
    }
    wrapped_lines(text, width).len() as u16
}

/// Byte range of every wrapped line within `text`.
///
/// Wrapping drops the spaces at a soft break and the trailing spaces before
/// a newline, so each range starts after whatever separator was consumed.
pub(super) fn line_spans(text: &str, width: u16) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for (idx, line) in wrapped_lines(text, width).iter().enumerate() {
        if idx > 0 {
            offset += text[offset..].len() - text[offset..].trim_start_matches(' ').len();
            if text[offset..].starts_with('\n') {
                offset += 1;
            }
        }
        let start = offset.min(text.len());
        let end = if text[start..].starts_with(line.as_str()) {
            start + line.len()
        } else {
            text[start..].find('\n').map_or(text.len(), |i| start + i)
        };
        spans.push(start..end);
        offset = end;
    }
    spans
}

/// Index of the wrapped line holding byte offset `pos`.
pub(super) fn line_of(spans: &[Range<usize>], pos: usize) -> usize {
    spans
        .iter()
        .rposition(|span| span.start <= pos)
        .unwrap_or(0)
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos` (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }
    boundary
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[pos..].char_indices().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }

    chars.peek().map(|&(i, _)| pos + i).unwrap_or(text.len())
}
