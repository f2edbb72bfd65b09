//! # Header Component
//!
//! Top bar: brand, decorative search box, five center destinations and
//! the action cluster on the right.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │ⓕ 🔍 Search Facebook   🏠 Home  👥 Friends ...   (◉) Olenna ⊞ 💬 3 🔔 17 (◉)│
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HeaderState` lives in `TuiState` and owns the active nav label
//! - `Header` is created each frame with borrowed state and props
//!
//! The search field is decorative; nothing is ever searched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::format::badge_label;
use crate::core::image::ImageSource;
use crate::core::model::{Icon, NavItem, UserRef};
use crate::core::sample;
use crate::core::state::Badges;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::avatar::Avatar;
use crate::tui::event::TuiEvent;
use crate::tui::focus::ListCursor;
use crate::tui::icons::{self, icon_span};

pub const HEADER_HEIGHT: u16 = 3;

/// Right-hand header buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    UserChip,
    Menu,
    Messenger,
    Notifications,
    Profile,
}

impl HeaderAction {
    pub const ALL: [HeaderAction; 5] = [
        HeaderAction::UserChip,
        HeaderAction::Menu,
        HeaderAction::Messenger,
        HeaderAction::Notifications,
        HeaderAction::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeaderAction::UserChip => "Account",
            HeaderAction::Menu => "Menu",
            HeaderAction::Messenger => "Messenger",
            HeaderAction::Notifications => "Notifications",
            HeaderAction::Profile => "View Profile",
        }
    }
}

/// Something the keyboard cursor can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Nav(usize),
    Action(HeaderAction),
}

/// Events emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEvent {
    Navigate(String),
    Action(String),
}

/// Persistent header state.
pub struct HeaderState {
    pub destinations: Vec<NavItem>,
    pub active_nav: String,
    pub cursor: ListCursor,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            destinations: sample::header_destinations(),
            active_nav: "Home".to_string(),
            cursor: ListCursor::default(),
        }
    }

    /// Mark a destination active. Any label is accepted.
    pub fn select(&mut self, label: &str) -> HeaderEvent {
        self.active_nav = label.to_string();
        HeaderEvent::Navigate(label.to_string())
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active_nav == label
    }

    pub fn targets(&self) -> Vec<HeaderTarget> {
        (0..self.destinations.len())
            .map(HeaderTarget::Nav)
            .chain(HeaderAction::ALL.into_iter().map(HeaderTarget::Action))
            .collect()
    }

    pub fn activate(&mut self, target: HeaderTarget) -> Option<HeaderEvent> {
        match target {
            HeaderTarget::Nav(idx) => {
                let item = self.destinations.get(idx)?;
                if item.disabled {
                    return None;
                }
                let label = item.label.clone();
                Some(self.select(&label))
            }
            HeaderTarget::Action(action) => Some(HeaderEvent::Action(action.label().to_string())),
        }
    }

    fn cursor_target(&self) -> Option<HeaderTarget> {
        let targets = self.targets();
        self.cursor.get(targets.len()).map(|i| targets[i])
    }
}

impl EventHandler for HeaderState {
    type Event = HeaderEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HeaderEvent> {
        match event {
            TuiEvent::Left | TuiEvent::Up => {
                self.cursor.prev();
                None
            }
            TuiEvent::Right | TuiEvent::Down => {
                self.cursor.next(self.targets().len());
                None
            }
            TuiEvent::Submit => {
                let target = self.cursor_target()?;
                self.activate(target)
            }
            _ => None,
        }
    }
}

/// Badge spans for a count, empty when the badge is suppressed.
pub fn badge_spans(count: u32) -> Vec<Span<'static>> {
    match badge_label(count) {
        Some(label) => vec![
            Span::raw(" "),
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .bg(icons::BADGE)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ],
        None => Vec::new(),
    }
}

/// Transient render wrapper for the header.
pub struct Header<'a> {
    pub state: &'a HeaderState,
    pub user: &'a UserRef,
    pub badges: Badges,
    pub images: &'a dyn ImageSource,
    pub focused: bool,
}

impl<'a> Header<'a> {
    fn cursor_on(&self, target: HeaderTarget) -> bool {
        self.focused && self.state.cursor_target() == Some(target)
    }

    fn left_spans(&self) -> Vec<Span<'static>> {
        let brand = Style::default().fg(Color::White).bg(icons::PRIMARY).add_modifier(Modifier::BOLD);
        let search = Style::default().fg(Color::Gray).bg(Color::Indexed(237));
        vec![
            Span::styled(format!(" {} ", icons::glyph(Icon::Brand)), brand),
            Span::raw(" "),
            Span::styled(format!(" {} Search Facebook ", icons::glyph(Icon::Search)), search),
        ]
    }

    fn nav_spans(&self, with_labels: bool) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (idx, item) in self.state.destinations.iter().enumerate() {
            let mut style = if self.state.is_active(&item.label) {
                Style::default()
                    .fg(icons::PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.cursor_on(HeaderTarget::Nav(idx)) {
                style = style.patch(icons::cursor());
            }
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let text = if with_labels {
                format!("{} {}", icons::glyph(item.icon), item.label)
            } else {
                icons::glyph(item.icon).to_string()
            };
            spans.push(Span::styled(text, style));
        }
        spans
    }

    fn right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for action in HeaderAction::ALL {
            let style = if self.cursor_on(HeaderTarget::Action(action)) {
                icons::cursor()
            } else {
                Style::default()
            };
            spans.push(Span::raw(" "));
            match action {
                HeaderAction::UserChip => {
                    let avatar = Avatar::new(&self.user.name, self.user.avatar_url.as_deref(), 2);
                    spans.extend(avatar.spans(self.images).into_iter().map(|s| s.patch_style(style)));
                    spans.push(Span::styled(format!(" {}", self.user.first_name()), style));
                }
                HeaderAction::Menu => spans.push(icon_span(Icon::Menu, style)),
                HeaderAction::Messenger => {
                    spans.push(icon_span(Icon::Messenger, style));
                    spans.extend(badge_spans(self.badges.messenger));
                }
                HeaderAction::Notifications => {
                    spans.push(icon_span(Icon::Bell, style));
                    spans.extend(badge_spans(self.badges.notifications));
                }
                HeaderAction::Profile => {
                    let avatar = Avatar::new(&self.user.name, self.user.avatar_url.as_deref(), 2);
                    spans.extend(avatar.spans(self.images).into_iter().map(|s| s.patch_style(style)));
                }
            }
        }
        spans.push(Span::raw(" "));
        spans
    }
}

fn spans_width(spans: &[Span]) -> u16 {
    spans.iter().map(|s| s.width()).sum::<usize>() as u16
}

impl<'a> Component for Header<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(icons::border(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let left = self.left_spans();
        let right = self.right_spans();
        let [left_area, center_area, right_area] = Layout::horizontal([
            Constraint::Length(spans_width(&left)),
            Constraint::Min(0),
            Constraint::Length(spans_width(&right)),
        ])
        .areas(inner);

        // Labels when they fit, icons only otherwise
        let mut nav = self.nav_spans(true);
        if spans_width(&nav) > center_area.width {
            nav = self.nav_spans(false);
        }

        frame.render_widget(Paragraph::new(Line::from(left)), left_area);
        frame.render_widget(
            Paragraph::new(Line::from(nav)).alignment(Alignment::Center),
            center_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(right)).alignment(Alignment::Right),
            right_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::NoImages;
    use crate::test_support::{buffer_text, render_to_buffer};

    fn render_header(state: &HeaderState, badges: Badges, width: u16) -> String {
        let user = sample::current_user();
        let buffer = render_to_buffer(width, HEADER_HEIGHT, |f| {
            let mut header = Header {
                state,
                user: &user,
                badges,
                images: &NoImages,
                focused: false,
            };
            let area = f.area();
            header.render(f, area);
        });
        buffer_text(&buffer)
    }

    #[test]
    fn initial_active_nav_is_home() {
        let state = HeaderState::new();
        assert!(state.is_active("Home"));
        assert_eq!(state.destinations.len(), 5);
    }

    #[test]
    fn select_sets_active_label() {
        let mut state = HeaderState::new();
        let event = state.select("Watch");
        assert_eq!(event, HeaderEvent::Navigate("Watch".to_string()));
        assert!(state.is_active("Watch"));
        assert!(!state.is_active("Home"));
    }

    #[test]
    fn keyboard_moves_and_selects() {
        let mut state = HeaderState::new();
        assert_eq!(state.handle_event(&TuiEvent::Right), None);
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(HeaderEvent::Navigate("Friends".to_string())));
        assert_eq!(state.active_nav, "Friends");
    }

    #[test]
    fn action_buttons_do_not_change_active_nav() {
        let mut state = HeaderState::new();
        let event = state.activate(HeaderTarget::Action(HeaderAction::Messenger));
        assert_eq!(event, Some(HeaderEvent::Action("Messenger".to_string())));
        assert_eq!(state.active_nav, "Home");
    }

    #[test]
    fn badge_spans_follow_badge_rule() {
        assert!(badge_spans(0).is_empty());
        assert_eq!(badge_spans(3)[1].content, " 3 ");
        assert_eq!(badge_spans(100)[1].content, " 99+ ");
    }

    #[test]
    fn header_renders_badges() {
        let text = render_header(&HeaderState::new(), Badges::default(), 160);
        assert!(text.contains(" 3 "));
        assert!(text.contains(" 17 "));
        assert!(text.contains("Search Facebook"));
        assert!(text.contains("Olenna"));
    }

    #[test]
    fn header_caps_large_badges() {
        let badges = Badges {
            messenger: 0,
            notifications: 250,
        };
        let text = render_header(&HeaderState::new(), badges, 160);
        assert!(text.contains("99+"));
        assert!(!text.contains("250"));
    }

    #[test]
    fn header_shows_nav_labels_when_wide() {
        let text = render_header(&HeaderState::new(), Badges::default(), 200);
        for label in ["Home", "Friends", "Watch", "Marketplace", "Groups"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn header_drops_nav_labels_when_narrow() {
        let text = render_header(&HeaderState::new(), Badges::default(), 80);
        assert!(!text.contains("Marketplace"));
    }
}
