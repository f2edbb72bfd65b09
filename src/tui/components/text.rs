//! Line-building helpers shared by the card components.
//!
//! Cards pre-wrap their content into `Line`s of a known width so the
//! rendered height equals `lines.len()` plus borders. Wrapping uses
//! `textwrap`, widths use `unicode-width` through `Line::width`.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Wrap `text` to `width` columns, honoring embedded newlines.
///
/// Blank input lines are kept as empty lines. Always returns at least one
/// line for non-empty input.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);

    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(
            textwrap::wrap(paragraph, &options)
                .into_iter()
                .map(|cow| cow.into_owned()),
        );
    }
    out
}

/// Wrap and style every resulting line the same way.
pub fn wrapped_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|s| Line::from(Span::styled(s, style)))
        .collect()
}

/// Put `left` at the start and `right` at the end of a `width`-wide line.
///
/// If both don't fit, `right` is dropped.
pub fn spread(
    left: Vec<Span<'static>>,
    right: Vec<Span<'static>>,
    width: u16,
) -> Line<'static> {
    let left_width: usize = left.iter().map(|s| s.width()).sum();
    let right_width: usize = right.iter().map(|s| s.width()).sum();
    let width = width as usize;

    let mut spans = left;
    if left_width + right_width < width {
        spans.push(Span::raw(" ".repeat(width - left_width - right_width)));
        spans.extend(right);
    }
    Line::from(spans)
}

/// Center `spans` inside a `width`-wide slot.
pub fn centered(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let free = width.saturating_sub(used);
    let left = free / 2;
    let mut out = vec![Span::raw(" ".repeat(left))];
    out.extend(spans);
    out.push(Span::raw(" ".repeat(free - left)));
    out
}

/// Horizontal rule across the full width.
pub fn rule(width: u16, style: Style) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width as usize), style))
}

/// Draw a box of `width` columns around pre-wrapped `content`.
///
/// Content lines should be at most `width - 4` wide (two border columns
/// and one space of padding per side).
pub fn framed(content: Vec<Line<'static>>, width: u16, style: Style) -> Vec<Line<'static>> {
    let width = width.max(4) as usize;
    let inner = width - 4;

    let mut out = Vec::with_capacity(content.len() + 2);
    out.push(Line::from(Span::styled(
        format!("┌{}┐", "─".repeat(width - 2)),
        style,
    )));
    for line in content {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![Span::styled("│ ", style)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", style));
        out.push(Line::from(spans));
    }
    out.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width - 2)),
        style,
    )));
    out
}

/// Cut `s` to at most `max` display columns, ending in `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
