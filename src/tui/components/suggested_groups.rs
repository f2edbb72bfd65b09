//! # Suggested Groups Panel
//!
//! Shows up to [`MAX_RENDERED_GROUPS`] group cards with Join and dismiss
//! controls. `SuggestedGroupsState` is the only owner of the visible set;
//! dismissing filters the card out for good.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Suggested Groups             See All │
//! │                                      │
//! │ ▓▓ (D) (P) (R) (J)                ✕  │
//! │ Mad Men Fans (MADdicts)              │
//! │ 6,195 members                        │
//! │ + Join Group                         │
//! └──────────────────────────────────────┘
//! ```

use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::format::format_count;
use crate::core::image::{ImageSource, NoImages};
use crate::core::model::{GroupCard, Icon};
use crate::tui::component::EventHandler;
use crate::tui::components::avatar::Avatar;
use crate::tui::components::text::{spread, truncate, wrapped_lines};
use crate::tui::event::TuiEvent;
use crate::tui::focus::ListCursor;
use crate::tui::icons::{self, icon_span};

/// Cards drawn at once, however many are visible.
pub const MAX_RENDERED_GROUPS: usize = 2;
/// Member avatars drawn on a card's cover strip.
pub const MAX_MEMBER_PREVIEWS: usize = 4;

const EMPTY_TERMINAL: &str = "No more group suggestions for now.";
const EMPTY_HINT: &str = "No current suggestions. Try \"See All\".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupsEvent {
    Joined(String),
    Dismissed(String),
    SeeAll,
}

/// Cursor targets; indices point into [`SuggestedGroupsState::rendered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupsTarget {
    SeeAll,
    Dismiss(usize),
    Join(usize),
}

pub struct SuggestedGroupsState {
    pub groups: Vec<GroupCard>,
    pub cursor: ListCursor,
    /// Whether the owner handles "See All".
    pub has_see_all: bool,
}

impl SuggestedGroupsState {
    pub fn new(groups: Vec<GroupCard>, has_see_all: bool) -> Self {
        Self {
            groups,
            cursor: ListCursor::default(),
            has_see_all,
        }
    }

    /// Remove the card with `id`. Unknown ids leave the set unchanged but
    /// still produce the event.
    pub fn dismiss(&mut self, id: &str) -> GroupsEvent {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        if self.groups.len() == before {
            debug!("Dismiss for unknown group {id}");
        }
        self.cursor.clamp(self.targets().len());
        GroupsEvent::Dismissed(id.to_string())
    }

    pub fn join(&self, id: &str) -> GroupsEvent {
        GroupsEvent::Joined(id.to_string())
    }

    pub fn see_all(&self) -> Option<GroupsEvent> {
        self.has_see_all.then_some(GroupsEvent::SeeAll)
    }

    /// The cards actually drawn.
    pub fn rendered(&self) -> &[GroupCard] {
        &self.groups[..self.groups.len().min(MAX_RENDERED_GROUPS)]
    }

    pub fn is_terminal_empty(&self) -> bool {
        self.groups.is_empty() && !self.has_see_all
    }

    pub fn targets(&self) -> Vec<GroupsTarget> {
        let mut targets = Vec::new();
        if self.has_see_all {
            targets.push(GroupsTarget::SeeAll);
        }
        for i in 0..self.rendered().len() {
            targets.push(GroupsTarget::Dismiss(i));
            targets.push(GroupsTarget::Join(i));
        }
        targets
    }

    pub fn activate(&mut self, target: GroupsTarget) -> Option<GroupsEvent> {
        match target {
            GroupsTarget::SeeAll => self.see_all(),
            GroupsTarget::Dismiss(i) => {
                let id = self.rendered().get(i)?.id.clone();
                Some(self.dismiss(&id))
            }
            GroupsTarget::Join(i) => {
                let id = &self.rendered().get(i)?.id;
                Some(self.join(id))
            }
        }
    }

    fn cursor_target(&self) -> Option<GroupsTarget> {
        let targets = self.targets();
        self.cursor.get(targets.len()).map(|i| targets[i])
    }
}

impl EventHandler for SuggestedGroupsState {
    type Event = GroupsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GroupsEvent> {
        match event {
            TuiEvent::Up | TuiEvent::Left => {
                self.cursor.prev();
                None
            }
            TuiEvent::Down | TuiEvent::Right => {
                self.cursor.next(self.targets().len());
                None
            }
            TuiEvent::Submit => {
                let target = self.cursor_target()?;
                self.activate(target)
            }
            TuiEvent::Char('d') => match self.cursor_target()? {
                GroupsTarget::Dismiss(i) | GroupsTarget::Join(i) => {
                    self.activate(GroupsTarget::Dismiss(i))
                }
                GroupsTarget::SeeAll => None,
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the groups panel.
#[derive(Clone, Copy)]
pub struct SuggestedGroups<'a> {
    pub state: &'a SuggestedGroupsState,
    pub images: &'a dyn ImageSource,
    pub focused: bool,
}

impl<'a> SuggestedGroups<'a> {
    fn style_for(&self, target: GroupsTarget, base: Style) -> Style {
        if self.focused && self.state.cursor_target() == Some(target) {
            base.patch(icons::cursor())
        } else {
            base
        }
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        let probe = SuggestedGroups {
            images: &NoImages,
            ..*self
        };
        probe.lines(width.saturating_sub(4)).len() as u16 + 2
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut right = Vec::new();
        if self.state.has_see_all {
            right.push(Span::styled("See All", self.style_for(GroupsTarget::SeeAll, icons::link())));
        }
        let mut lines = vec![spread(
            vec![Span::styled("Suggested Groups", icons::bold())],
            right,
            width,
        )];

        if self.state.groups.is_empty() {
            let message = if self.state.is_terminal_empty() {
                EMPTY_TERMINAL
            } else {
                EMPTY_HINT
            };
            lines.push(Line::default());
            lines.extend(wrapped_lines(message, width, icons::muted()));
            return lines;
        }

        for (i, group) in self.state.rendered().iter().enumerate() {
            lines.push(Line::default());
            lines.extend(self.card_lines(i, group, width));
        }
        lines
    }

    fn card_lines(&self, i: usize, group: &GroupCard, width: u16) -> Vec<Line<'static>> {
        let mut cover = vec![Span::styled("▓▓", icons::muted())];
        for member in group.members_preview.iter().take(MAX_MEMBER_PREVIEWS) {
            cover.push(Span::raw(" "));
            cover.extend(Avatar::new(&member.name, Some(&member.avatar_url), 1).spans(self.images));
        }
        let close = icon_span(Icon::Close, self.style_for(GroupsTarget::Dismiss(i), icons::muted()));
        let cover_line = spread(cover, vec![close, Span::raw(" ")], width);

        let handle = group
            .handle
            .as_ref()
            .map(|h| format!(" ({h})"))
            .unwrap_or_default();
        let name_width = (width as usize).saturating_sub(handle.chars().count());
        let name_line = Line::from(vec![
            Span::styled(truncate(&group.name, name_width), icons::bold()),
            Span::styled(handle, icons::muted()),
        ]);

        let members_line = Line::from(Span::styled(
            format!("{} members", format_count(group.member_count)),
            icons::muted(),
        ));

        let join_style = self.style_for(
            GroupsTarget::Join(i),
            icons::link().add_modifier(Modifier::BOLD),
        );
        let join_line = Line::from(vec![
            icon_span(Icon::Plus, join_style),
            Span::styled(" Join Group", join_style),
        ]);

        vec![cover_line, name_line, members_line, join_line]
    }
}

impl<'a> Widget for SuggestedGroups<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(icons::border(self.focused))
            .padding(Padding::horizontal(1));
        let width = area.width.saturating_sub(4);
        Paragraph::new(self.lines(width)).block(block).render(area, buf);
    }
}
