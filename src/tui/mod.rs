//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and blocking: draw, wait for the next terminal event,
//! route it to the focused component, forward any resulting callback to
//! `core::update`, repeat. Nothing changes between inputs, so there are
//! no timers and no background tasks. Events the page ignores skip the
//! redraw.
//!
//! ## Focus
//!
//! Tab and Shift-Tab move focus between the header, sidebar, feed,
//! stories and groups. The two right-panel regions drop out of the cycle
//! while the panel is hidden. Scroll keys and the mouse wheel always go to
//! the feed.

pub mod component;
pub mod components;
pub mod event;
pub mod focus;
pub mod icons;
pub mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::sample;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FeedEvent, FeedState, GroupsEvent, HeaderEvent, HeaderState, SidebarEvent, SidebarState,
    StoriesEvent, StoriesFocus, StoriesPanel, SuggestedGroupsState,
};
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::focus::{FocusRegion, ListCursor};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: FocusRegion,
    // Persistent component states
    pub header: HeaderState,
    pub sidebar: SidebarState,
    pub feed: FeedState,
    pub groups: SuggestedGroupsState,
    pub stories_cursor: ListCursor,
    // Layout settings
    pub right_panel_breakpoint: u16,
    pub feed_max_width: u16,
    /// Whether the last frame had room for the right panel.
    pub right_panel_visible: bool,
}

impl TuiState {
    pub fn new(app: &App, config: &ResolvedConfig) -> Self {
        Self {
            focus: FocusRegion::Feed,
            header: HeaderState::new(),
            sidebar: SidebarState::new(),
            feed: FeedState::new(&app.posts),
            groups: SuggestedGroupsState::new(sample::suggested_groups(), true),
            stories_cursor: ListCursor::default(),
            right_panel_breakpoint: config.right_panel_breakpoint,
            feed_max_width: config.feed_max_width,
            right_panel_visible: true,
        }
    }

    /// Record panel visibility; focus leaves a panel that disappeared.
    pub fn set_right_panel_visible(&mut self, visible: bool) {
        if self.right_panel_visible != visible {
            debug!("Right panel visible: {}", visible);
        }
        self.right_panel_visible = visible;
        if !visible && self.focus.in_right_panel() {
            self.focus = FocusRegion::Feed;
        }
    }
}

impl From<HeaderEvent> for Action {
    fn from(event: HeaderEvent) -> Self {
        match event {
            HeaderEvent::Navigate(label) => Action::Navigate(label),
            HeaderEvent::Action(label) => Action::HeaderAction(label),
        }
    }
}

impl From<SidebarEvent> for Action {
    fn from(event: SidebarEvent) -> Self {
        match event {
            SidebarEvent::Navigate(href) => Action::FollowLink(href),
            SidebarEvent::ToggledExplore(expanded) => Action::ExploreToggled(expanded),
            SidebarEvent::Action(label) => Action::SidebarAction(label),
        }
    }
}

impl From<FeedEvent> for Action {
    fn from(event: FeedEvent) -> Self {
        match event {
            FeedEvent::CreatePost(control) => Action::CreatePost(control.action_name().to_string()),
            FeedEvent::Post { post_id, kind } => Action::PostAction { post_id, kind },
        }
    }
}

impl From<GroupsEvent> for Action {
    fn from(event: GroupsEvent) -> Self {
        match event {
            GroupsEvent::Joined(id) => Action::JoinGroup(id),
            GroupsEvent::Dismissed(id) => Action::DismissGroup(id),
            GroupsEvent::SeeAll => Action::SeeAllGroups,
        }
    }
}

impl From<StoriesEvent> for Action {
    fn from(event: StoriesEvent) -> Self {
        match event {
            StoriesEvent::AddStory => Action::AddStory,
            StoriesEvent::Archive => Action::StoryArchive,
            StoriesEvent::Settings => Action::StorySettings,
            StoriesEvent::View(id) => Action::ViewStory(id),
            StoriesEvent::SeeAll => Action::SeeAllStories,
        }
    }
}

/// Route one input event to whoever owns it.
///
/// Returns the forwarded callback, if the event produced one.
pub fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next(tui.right_panel_visible);
            debug!("Focus: {:?}", tui.focus);
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev(tui.right_panel_visible);
            debug!("Focus: {:?}", tui.focus);
            return None;
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown | TuiEvent::PageUp | TuiEvent::PageDown => {
            tui.feed.handle_event(&event);
            return None;
        }
        _ => {}
    }

    match tui.focus {
        FocusRegion::Header => tui.header.handle_event(&event).map(Action::from),
        FocusRegion::Sidebar => tui.sidebar.handle_event(&event).map(Action::from),
        FocusRegion::Feed => tui.feed.handle_event(&event).map(Action::from),
        FocusRegion::Stories => {
            let panel = StoriesPanel::new(&app.stories, app.images.as_ref()).see_all(true);
            StoriesFocus {
                cursor: &mut tui.stories_cursor,
                panel,
            }
            .handle_event(&event)
            .map(Action::from)
        }
        FocusRegion::Groups => tui.groups.handle_event(&event).map(Action::from),
    }
}

/// Mouse capture for wheel scrolling, released on drop.
struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Mouse capture enabled");
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app, &config);
    info!("Image source: {}", app.images.name());

    let mut terminal = ratatui::init();
    let result = MouseCaptureGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Plaza shutting down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = read_event()? else {
            continue;
        };
        needs_redraw = true;

        if let Some(action) = dispatch(app, tui, event)
            && update(app, action) == Effect::Quit
        {
            return Ok(());
        }
    }
}
