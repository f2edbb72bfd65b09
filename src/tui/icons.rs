//! Terminal glyphs and colors for the icon references in `core::model::Icon`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::model::Icon;

/// Brand blue used for the header, links and active items.
pub const PRIMARY: Color = Color::Blue;
/// Secondary text (timestamps, captions, counts).
pub const MUTED: Color = Color::DarkGray;
/// Unread badge background.
pub const BADGE: Color = Color::Red;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Brand => "ⓕ",
        Icon::Search => "🔍",
        Icon::Home => "🏠",
        Icon::Users => "👥",
        Icon::Watch => "▶",
        Icon::Store => "🏪",
        Icon::Menu => "⊞",
        Icon::Messenger => "💬",
        Icon::Bell => "🔔",
        Icon::Newspaper => "📰",
        Icon::Gamepad => "🎮",
        Icon::Calendar => "📅",
        Icon::Flag => "⚑",
        Icon::ListChecks => "☑",
        Icon::HeartHandshake => "🤝",
        Icon::ChevronDown => "▾",
        Icon::ChevronRight => "›",
        Icon::Settings => "⚙",
        Icon::LogOut => "⏻",
        Icon::Globe => "🌐",
        Icon::More => "⋯",
        Icon::ThumbsUp => "👍",
        Icon::Comment => "💬",
        Icon::Share => "↗",
        Icon::Plus => "+",
        Icon::PlusCircle => "⊕",
        Icon::Close => "✕",
        Icon::Pen => "✎",
        Icon::Images => "🖼",
        Icon::Video => "🎥",
        Icon::List => "☰",
        Icon::ImagePlus => "📷",
        Icon::Tags => "🏷",
        Icon::Map => "🗺",
        Icon::Picture => "🖼",
    }
}

pub fn icon_span(icon: Icon, style: Style) -> Span<'static> {
    Span::styled(glyph(icon), style)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default().fg(PRIMARY)
}

/// Style for the element under the keyboard cursor.
pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Border style for a panel, brighter when it has focus.
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(MUTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_and_people_glyphs_differ() {
        assert_ne!(glyph(Icon::Globe), glyph(Icon::Users));
    }

    #[test]
    fn focused_border_is_cyan() {
        assert_eq!(border(true).fg, Some(Color::Cyan));
        assert_eq!(border(false).fg, Some(MUTED));
    }
}
