//! # Sidebar Component
//!
//! Left navigation column: profile link, primary destinations, Shortcuts,
//! a collapsible Explore section, Create links and a pinned footer.
//!
//! The only state is `explore_expanded`. Collapsed shows the first
//! [`EXPLORE_COLLAPSED_COUNT`] explore items, expanded shows all of them,
//! and the trailing control reads "See More" or "See Less" accordingly.
//! The keyboard cursor is presentation state and lives alongside it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::format::create_href;
use crate::core::image::ImageSource;
use crate::core::model::{Icon, NavItem, UserRef};
use crate::core::sample::{self, CREATE_ITEMS, SIDEBAR_ACTIVE_PATH};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::avatar::Avatar;
use crate::tui::event::TuiEvent;
use crate::tui::focus::ListCursor;
use crate::tui::icons::{self, icon_span};

pub const SIDEBAR_WIDTH: u16 = 30;
/// Explore items shown while collapsed.
pub const EXPLORE_COLLAPSED_COUNT: usize = 4;
const FOOTER_HEIGHT: u16 = 3;

/// A row the keyboard cursor can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarTarget {
    Profile,
    Link(NavItem),
    ShortcutsMore,
    ExploreToggle,
    Create(&'static str),
    Settings,
    Logout,
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    Navigate(String),
    ToggledExplore(bool),
    Action(String),
}

pub struct SidebarState {
    pub explore_expanded: bool,
    pub cursor: ListCursor,
    pub navigation: Vec<NavItem>,
    pub shortcuts: Vec<NavItem>,
    pub explore: Vec<NavItem>,
    pub profile_href: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self::with_explore(sample::explore_items())
    }

    pub fn with_explore(explore: Vec<NavItem>) -> Self {
        Self {
            explore_expanded: false,
            cursor: ListCursor::default(),
            navigation: sample::sidebar_navigation(),
            shortcuts: sample::shortcuts(),
            explore,
            profile_href: sample::current_user().link().to_string(),
        }
    }

    pub fn toggle_explore(&mut self) -> SidebarEvent {
        self.explore_expanded = !self.explore_expanded;
        SidebarEvent::ToggledExplore(self.explore_expanded)
    }

    pub fn visible_explore(&self) -> &[NavItem] {
        if self.explore_expanded {
            &self.explore
        } else {
            &self.explore[..self.explore.len().min(EXPLORE_COLLAPSED_COUNT)]
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.explore_expanded { "See Less" } else { "See More" }
    }

    /// Activatable rows of the scrolling section, then the footer.
    pub fn targets(&self) -> Vec<SidebarTarget> {
        let mut targets = vec![SidebarTarget::Profile];
        targets.extend(self.navigation.iter().cloned().map(SidebarTarget::Link));
        targets.extend(self.shortcuts.iter().cloned().map(SidebarTarget::Link));
        targets.push(SidebarTarget::ShortcutsMore);
        targets.extend(self.visible_explore().iter().cloned().map(SidebarTarget::Link));
        targets.push(SidebarTarget::ExploreToggle);
        targets.extend(CREATE_ITEMS.into_iter().map(SidebarTarget::Create));
        targets.push(SidebarTarget::Settings);
        targets.push(SidebarTarget::Logout);
        targets
    }

    pub fn activate(&mut self, target: &SidebarTarget) -> Option<SidebarEvent> {
        match target {
            SidebarTarget::Profile => Some(SidebarEvent::Navigate(self.profile_href.clone())),
            SidebarTarget::Link(item) if item.disabled => None,
            SidebarTarget::Link(item) => Some(SidebarEvent::Navigate(item.href.clone())),
            SidebarTarget::ShortcutsMore => Some(SidebarEvent::Action("See More shortcuts".to_string())),
            SidebarTarget::ExploreToggle => Some(self.toggle_explore()),
            SidebarTarget::Create(label) => Some(SidebarEvent::Navigate(create_href(label))),
            SidebarTarget::Settings => Some(SidebarEvent::Action("Settings".to_string())),
            SidebarTarget::Logout => Some(SidebarEvent::Action("Logout".to_string())),
        }
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::Up => {
                self.cursor.prev();
                None
            }
            TuiEvent::Down => {
                self.cursor.next(self.targets().len());
                None
            }
            TuiEvent::Submit => {
                let targets = self.targets();
                let idx = self.cursor.get(targets.len())?;
                let event = self.activate(&targets[idx]);
                // Collapsing can remove rows under the cursor
                self.cursor.clamp(self.targets().len());
                event
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    pub state: &'a SidebarState,
    pub user: &'a UserRef,
    pub images: &'a dyn ImageSource,
    pub focused: bool,
}

impl<'a> Sidebar<'a> {
    fn row_style(&self, target_idx: usize, base: Style) -> Style {
        if self.focused && self.state.cursor.index == target_idx {
            base.patch(icons::cursor())
        } else {
            base
        }
    }

    fn link_line(&self, item: &NavItem, target_idx: usize) -> Line<'static> {
        let base = if item.href == SIDEBAR_ACTIVE_PATH {
            Style::default().fg(icons::PRIMARY).add_modifier(Modifier::BOLD)
        } else if item.disabled {
            icons::muted().add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        let style = self.row_style(target_idx, base);
        Line::from(vec![
            Span::raw(" "),
            icon_span(item.icon, style),
            Span::styled(format!(" {}", item.label), style),
        ])
    }

    fn heading(label: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!(" {}", label.to_uppercase()),
            icons::muted().add_modifier(Modifier::BOLD),
        ))
    }

    fn separator(width: u16) -> Line<'static> {
        Line::from(Span::styled("─".repeat(width as usize), icons::muted()))
    }

    /// Lines of the scrolling section plus the row index of the cursor.
    pub fn body_lines(&self, width: u16) -> (Vec<Line<'static>>, usize) {
        let state = self.state;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut target = 0usize;
        let mut cursor_row = 0usize;
        let mut mark = |row: usize, target: usize| {
            if target == state.cursor.index {
                cursor_row = row;
            }
        };

        // Profile
        mark(lines.len(), target);
        let avatar = Avatar::new(&self.user.name, self.user.avatar_url.as_deref(), 2);
        let style = self.row_style(target, icons::bold());
        let mut spans = vec![Span::raw(" ")];
        spans.extend(avatar.spans(self.images));
        spans.push(Span::styled(format!(" {}", self.user.name), style));
        lines.push(Line::from(spans));
        target += 1;

        for item in &state.navigation {
            mark(lines.len(), target);
            lines.push(self.link_line(item, target));
            target += 1;
        }

        lines.push(Self::separator(width));
        lines.push(Self::heading("Shortcuts"));
        for item in &state.shortcuts {
            mark(lines.len(), target);
            lines.push(self.link_line(item, target));
            target += 1;
        }
        mark(lines.len(), target);
        let style = self.row_style(target, icons::muted());
        lines.push(Line::from(vec![
            Span::raw(" "),
            icon_span(Icon::ChevronDown, style),
            Span::styled(" See More", style),
        ]));
        target += 1;

        lines.push(Self::separator(width));
        lines.push(Self::heading("Explore"));
        for item in state.visible_explore() {
            mark(lines.len(), target);
            lines.push(self.link_line(item, target));
            target += 1;
        }
        mark(lines.len(), target);
        let style = self.row_style(target, icons::muted());
        let chevron = if state.explore_expanded { "▴" } else { icons::glyph(Icon::ChevronDown) };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(chevron, style),
            Span::styled(format!(" {}", state.toggle_label()), style),
        ]));
        target += 1;

        lines.push(Self::separator(width));
        lines.push(Self::heading("Create"));
        for label in CREATE_ITEMS {
            mark(lines.len(), target);
            let style = self.row_style(target, icons::muted());
            lines.push(Line::from(Span::styled(format!("   {label}"), style)));
            target += 1;
        }

        (lines, cursor_row)
    }

    fn footer_lines(&self, first_target: usize) -> Vec<Line<'static>> {
        [(Icon::Settings, "Settings"), (Icon::LogOut, "Logout")]
            .into_iter()
            .enumerate()
            .map(|(i, (icon, label))| {
                let style = self.row_style(first_target + i, icons::muted());
                Line::from(vec![
                    Span::raw(" "),
                    icon_span(icon, style),
                    Span::styled(format!(" {label}"), style),
                ])
            })
            .collect()
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(icons::border(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(inner);

        let (lines, cursor_row) = self.body_lines(body_area.width);
        // Keep the cursor row on screen
        let offset = (cursor_row as u16).saturating_sub(body_area.height.saturating_sub(1));
        let body_target_count = self.state.targets().len() - 2;
        frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), body_area);

        let footer = Paragraph::new(self.footer_lines(body_target_count))
            .block(Block::default().borders(Borders::TOP).border_style(icons::muted()));
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::NoImages;
    use crate::test_support::{buffer_text, render_to_buffer};

    fn render_sidebar(state: &SidebarState) -> String {
        let user = sample::current_user();
        let buffer = render_to_buffer(SIDEBAR_WIDTH, 40, |f| {
            let mut sidebar = Sidebar {
                state,
                user: &user,
                images: &NoImages,
                focused: false,
            };
            let area = f.area();
            sidebar.render(f, area);
        });
        buffer_text(&buffer)
    }

    #[test]
    fn explore_starts_collapsed_at_four() {
        let state = SidebarState::new();
        assert!(!state.explore_expanded);
        assert_eq!(state.visible_explore().len(), 4);
        assert_eq!(state.toggle_label(), "See More");
    }

    #[test]
    fn toggle_expands_to_all_items() {
        let mut state = SidebarState::new();
        assert_eq!(state.toggle_explore(), SidebarEvent::ToggledExplore(true));
        assert_eq!(state.visible_explore().len(), 5);
        assert_eq!(state.toggle_label(), "See Less");
    }

    #[test]
    fn double_toggle_restores_count() {
        let mut state = SidebarState::new();
        let before = state.visible_explore().len();
        state.toggle_explore();
        state.toggle_explore();
        assert_eq!(state.visible_explore().len(), before);
        assert_eq!(before, 4);
    }

    #[test]
    fn short_explore_list_is_not_padded() {
        let state = SidebarState::with_explore(sample::explore_items().into_iter().take(2).collect());
        assert_eq!(state.visible_explore().len(), 2);
    }

    #[test]
    fn collapsed_sidebar_hides_fifth_item() {
        let text = render_sidebar(&SidebarState::new());
        assert!(text.contains("Friend Lists"));
        assert!(!text.contains("Fundraisers"));
        assert!(text.contains("See More"));
    }

    #[test]
    fn expanded_sidebar_shows_fifth_item() {
        let mut state = SidebarState::new();
        state.toggle_explore();
        let text = render_sidebar(&state);
        assert!(text.contains("Fundraisers"));
        assert!(text.contains("See Less"));
    }

    #[test]
    fn sidebar_renders_sections() {
        let text = render_sidebar(&SidebarState::new());
        for needle in ["Olenna Mason", "News Feed", "SHORTCUTS", "FarmVille 2", "EXPLORE", "CREATE", "Settings", "Logout"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn toggle_row_activation_flips_flag() {
        let mut state = SidebarState::new();
        let toggle_idx = state
            .targets()
            .iter()
            .position(|t| *t == SidebarTarget::ExploreToggle)
            .unwrap();
        state.cursor.index = toggle_idx;
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SidebarEvent::ToggledExplore(true)));
        // One more explore row now sits above the toggle
        assert_eq!(state.targets()[toggle_idx + 1], SidebarTarget::ExploreToggle);
    }

    #[test]
    fn create_links_use_lowercase_hrefs() {
        let mut state = SidebarState::new();
        let event = state.activate(&SidebarTarget::Create("Fundraiser"));
        assert_eq!(event, Some(SidebarEvent::Navigate("#/create/fundraiser".to_string())));
    }

    #[test]
    fn disabled_links_do_nothing() {
        let mut state = SidebarState::new();
        let mut item = NavItem::new("Old", Icon::Flag, "#/old");
        item.disabled = true;
        assert_eq!(state.activate(&SidebarTarget::Link(item)), None);
    }
}
