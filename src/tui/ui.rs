//! Page shell: places the header, sidebar, feed column, right panel and
//! status line, then hands each region to its component.
//!
//! ```text
//! ┌───────────────────────── header (3) ─────────────────────────┐
//! ├──────────┬──────────────────────────────────┬────────────────┤
//! │ sidebar  │        feed (centered, max w)     │ stories        │
//! │  (30)    │                                   │ groups   (36)  │
//! ├──────────┴──────────────────────────────────┴────────────────┤
//! │ status line (1)                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The right panel exists only when the terminal is at least as wide as
//! the configured breakpoint.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::header::HEADER_HEIGHT;
use crate::tui::components::sidebar::SIDEBAR_WIDTH;
use crate::tui::components::{Feed, Header, Sidebar, StoriesPanel, SuggestedGroups};
use crate::tui::components::text::spread;
use crate::tui::focus::FocusRegion;
use crate::tui::icons;

pub const RIGHT_PANEL_WIDTH: u16 = 36;
const STATUS_HEIGHT: u16 = 1;
const KEY_HINTS: &str = "Tab focus · ←↑↓→ move · Enter select · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub right: Option<Rect>,
    pub status: Rect,
}

pub fn shell_areas(area: Rect, right_panel_breakpoint: u16, feed_max_width: u16) -> ShellAreas {
    use Constraint::{Length, Max, Min};

    let [header, body, status] =
        Layout::vertical([Length(HEADER_HEIGHT), Min(0), Length(STATUS_HEIGHT)]).areas(area);

    let show_right = area.width >= right_panel_breakpoint;
    let (sidebar, center, right) = if show_right {
        let [sidebar, center, right] =
            Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0), Length(RIGHT_PANEL_WIDTH)]).areas(body);
        (sidebar, center, Some(right))
    } else {
        let [sidebar, center] = Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body);
        (sidebar, center, None)
    };

    // +1 column for the feed scrollbar
    let [main] = Layout::horizontal([Max(feed_max_width.saturating_add(1))])
        .flex(Flex::Center)
        .areas(center);

    ShellAreas {
        header,
        sidebar,
        main,
        right,
        status,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let areas = shell_areas(frame.area(), tui.right_panel_breakpoint, tui.feed_max_width);
    tui.set_right_panel_visible(areas.right.is_some());
    let images = app.images.as_ref();
    let focus = tui.focus;

    Header {
        state: &tui.header,
        user: &app.current_user,
        badges: app.badges,
        images,
        focused: focus == FocusRegion::Header,
    }
    .render(frame, areas.header);

    Sidebar {
        state: &tui.sidebar,
        user: &app.current_user,
        images,
        focused: focus == FocusRegion::Sidebar,
    }
    .render(frame, areas.sidebar);

    Feed {
        state: &mut tui.feed,
        user: &app.current_user,
        posts: &app.posts,
        images,
        focused: focus == FocusRegion::Feed,
    }
    .render(frame, areas.main);

    if let Some(right) = areas.right {
        draw_right_panel(frame, right, app, tui);
    }

    let status = spread(
        vec![Span::styled(format!(" {}", app.status_message), icons::bold())],
        vec![Span::styled(format!("{KEY_HINTS} "), icons::muted())],
        areas.status.width,
    );
    frame.render_widget(Paragraph::new(status), areas.status);
}

fn draw_right_panel(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let images = app.images.as_ref();
    let mut stories = StoriesPanel::new(&app.stories, images).see_all(true);
    if tui.focus == FocusRegion::Stories {
        stories = stories.cursor(tui.stories_cursor.index);
    }
    let groups = SuggestedGroups {
        state: &tui.groups,
        images,
        focused: tui.focus == FocusRegion::Groups,
    };

    let stories_height = stories.calculate_height(area.width);
    let groups_height = groups.calculate_height(area.width);
    let [stories_area, _, groups_area] = Layout::vertical([
        Constraint::Length(stories_height),
        Constraint::Length(1),
        Constraint::Length(groups_height),
    ])
    .areas(area);

    frame.render_widget(stories, stories_area);
    frame.render_widget(groups, groups_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::test_support::{buffer_text, render_to_buffer, test_app};

    #[test]
    fn wide_terminal_shows_right_panel() {
        let areas = shell_areas(Rect::new(0, 0, 160, 50), 120, 72);
        let right = areas.right.unwrap();
        assert_eq!(right.width, RIGHT_PANEL_WIDTH);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.status.y, 49);
    }

    #[test]
    fn narrow_terminal_hides_right_panel() {
        let areas = shell_areas(Rect::new(0, 0, 119, 40), 120, 72);
        assert!(areas.right.is_none());
        let areas = shell_areas(Rect::new(0, 0, 120, 40), 120, 72);
        assert!(areas.right.is_some());
    }

    #[test]
    fn feed_column_is_capped_and_centered() {
        let areas = shell_areas(Rect::new(0, 0, 200, 40), 120, 72);
        assert_eq!(areas.main.width, 73);
        let center_start = SIDEBAR_WIDTH;
        let center_end = 200 - RIGHT_PANEL_WIDTH;
        let left_gap = areas.main.x - center_start;
        let right_gap = center_end - (areas.main.x + areas.main.width);
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn full_page_renders_every_region() {
        let app = test_app();
        let mut tui = TuiState::new(&app, &ResolvedConfig::default());
        let buffer = render_to_buffer(160, 50, |f| draw_ui(f, &app, &mut tui));
        let text = buffer_text(&buffer);
        for needle in [
            "Search Facebook",
            "News Feed",
            "What's on your mind, Olenna?",
            "Stories",
            "Suggested Groups",
            "Welcome to Plaza!",
        ] {
            assert!(text.contains(needle), "missing {needle}");
        }
        assert!(tui.right_panel_visible);
    }

    #[test]
    fn narrow_page_omits_right_panel() {
        let app = test_app();
        let mut tui = TuiState::new(&app, &ResolvedConfig::default());
        let buffer = render_to_buffer(100, 40, |f| draw_ui(f, &app, &mut tui));
        let text = buffer_text(&buffer);
        assert!(!text.contains("Suggested Groups"));
        assert!(!tui.right_panel_visible);
    }
}
