//! # Stories Panel
//!
//! ```text
//! ┌ Stories ─────────── Archive · Settings ┐
//! │ ⊕ Add to Your Story                    │
//! │     Share a photo, video or write ...  │
//! │ (JA) Jane Doe                          │
//! │ (JO) John Smith                        │
//! │ See All Stories ›                      │
//! └────────────────────────────────────────┘
//! ```
//!
//! Stateless: the panel is rebuilt from a story slice every frame. The
//! keyboard cursor belongs to the owner and comes in as a prop.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::image::{ImageSource, NoImages};
use crate::core::model::{Icon, StoryItem};
use crate::tui::component::EventHandler;
use crate::tui::components::avatar::Avatar;
use crate::tui::components::text::{spread, wrapped_lines};
use crate::tui::event::TuiEvent;
use crate::tui::focus::ListCursor;
use crate::tui::icons::{self, icon_span};

pub const MAX_VISIBLE_STORIES: usize = 3;
const ADD_STORY_CAPTION: &str = "Share a photo, video or write something.";
const CAPTION_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoriesTarget {
    Archive,
    Settings,
    AddStory,
    View(usize),
    SeeAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesEvent {
    AddStory,
    Archive,
    Settings,
    View(String),
    SeeAll,
}

#[derive(Clone, Copy)]
pub struct StoriesPanel<'a> {
    pub stories: &'a [StoryItem],
    pub images: &'a dyn ImageSource,
    /// Whether the owner handles "See All Stories".
    pub has_see_all: bool,
    pub cursor: Option<usize>,
}

impl<'a> StoriesPanel<'a> {
    pub fn new(stories: &'a [StoryItem], images: &'a dyn ImageSource) -> Self {
        Self {
            stories,
            images,
            has_see_all: false,
            cursor: None,
        }
    }

    pub fn see_all(mut self, has_see_all: bool) -> Self {
        self.has_see_all = has_see_all;
        self
    }

    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }

    pub fn visible(&self) -> &'a [StoryItem] {
        &self.stories[..self.stories.len().min(MAX_VISIBLE_STORIES)]
    }

    pub fn shows_see_all(&self) -> bool {
        self.stories.len() > MAX_VISIBLE_STORIES && self.has_see_all
    }

    pub fn targets(&self) -> Vec<StoriesTarget> {
        let mut targets = vec![StoriesTarget::Archive, StoriesTarget::Settings, StoriesTarget::AddStory];
        targets.extend((0..self.visible().len()).map(StoriesTarget::View));
        if self.shows_see_all() {
            targets.push(StoriesTarget::SeeAll);
        }
        targets
    }

    pub fn activate(&self, target: StoriesTarget) -> Option<StoriesEvent> {
        match target {
            StoriesTarget::Archive => Some(StoriesEvent::Archive),
            StoriesTarget::Settings => Some(StoriesEvent::Settings),
            StoriesTarget::AddStory => Some(StoriesEvent::AddStory),
            StoriesTarget::View(idx) => self
                .visible()
                .get(idx)
                .map(|story| StoriesEvent::View(story.id.clone())),
            StoriesTarget::SeeAll => self.shows_see_all().then_some(StoriesEvent::SeeAll),
        }
    }

    fn style_for(&self, target: StoriesTarget, base: Style) -> Style {
        let targets = self.targets();
        match self.cursor.and_then(|i| targets.get(i)) {
            Some(t) if *t == target => base.patch(icons::cursor()),
            _ => base,
        }
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        let probe = StoriesPanel {
            images: &NoImages,
            ..*self
        };
        probe.lines(width.saturating_sub(4)).len() as u16 + 2
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let links = vec![
            Span::styled("Archive", self.style_for(StoriesTarget::Archive, icons::link())),
            Span::styled(" · ", icons::muted()),
            Span::styled("Settings", self.style_for(StoriesTarget::Settings, icons::link())),
        ];
        lines.push(spread(vec![Span::styled("Stories", icons::bold())], links, width));

        let add_style = self.style_for(StoriesTarget::AddStory, icons::bold());
        lines.push(Line::from(vec![
            icon_span(Icon::PlusCircle, icons::link().add_modifier(Modifier::BOLD)),
            Span::styled(" Add to Your Story", add_style),
        ]));
        let caption_width = width.saturating_sub(CAPTION_INDENT as u16);
        for mut line in wrapped_lines(ADD_STORY_CAPTION, caption_width, icons::muted()) {
            line.spans.insert(0, Span::raw(" ".repeat(CAPTION_INDENT)));
            lines.push(line);
        }

        for (idx, story) in self.visible().iter().enumerate() {
            let (ring, label) = if story.viewed {
                (icons::MUTED, icons::muted())
            } else {
                (icons::PRIMARY, icons::bold())
            };
            let avatar = Avatar::new(&story.user_name, Some(&story.avatar_url), 2).ring(ring);
            let mut spans = avatar.spans(self.images);
            spans.push(Span::styled(
                format!(" {}", story.user_name),
                self.style_for(StoriesTarget::View(idx), label),
            ));
            lines.push(Line::from(spans));
        }

        if self.shows_see_all() {
            let style = self.style_for(StoriesTarget::SeeAll, icons::link());
            lines.push(Line::from(vec![
                Span::styled("See All Stories ", style),
                icon_span(Icon::ChevronRight, style),
            ]));
        }

        lines
    }
}

impl<'a> Widget for StoriesPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(icons::border(self.cursor.is_some()))
            .padding(Padding::horizontal(1));
        let width = area.width.saturating_sub(4);
        Paragraph::new(self.lines(width)).block(block).render(area, buf);
    }
}

/// Keyboard handling for the stories panel while it holds focus.
pub struct StoriesFocus<'a> {
    pub cursor: &'a mut ListCursor,
    pub panel: StoriesPanel<'a>,
}

impl<'a> EventHandler for StoriesFocus<'a> {
    type Event = StoriesEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<StoriesEvent> {
        let targets = self.panel.targets();
        match event {
            TuiEvent::Up | TuiEvent::Left => {
                self.cursor.prev();
                None
            }
            TuiEvent::Down | TuiEvent::Right => {
                self.cursor.next(targets.len());
                None
            }
            TuiEvent::Submit => {
                let idx = self.cursor.get(targets.len())?;
                self.panel.activate(targets[idx])
            }
            _ => None,
        }
    }
}
