//! # Create Post Card
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  ✎ Make Post    🖼 Photo/Video Album    🎥 Live Video  │
//! │ ──────────────────────────────────────────────────── │
//! │ (OL) What's on your mind, Olenna?                    │
//! │ ──────────────────────────────────────────────────── │
//! │    ☰ List         📷 Photo/Video      🏷 Tag Friends   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is a real composer. Every control just names the action
//! it would start.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::image::ImageSource;
use crate::core::model::{Icon, UserRef};
use crate::tui::components::avatar::Avatar;
use crate::tui::components::text::{centered, rule};
use crate::tui::icons::{self, icon_span};

/// Fixed card height, borders included.
pub const CREATE_POST_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePostControl {
    MakePost,
    PhotoVideoAlbum,
    LiveVideo,
    Input,
    List,
    PhotoVideo,
    TagFriends,
}

impl CreatePostControl {
    /// Cursor order: tabs, input, footer buttons.
    pub const ALL: [CreatePostControl; 7] = [
        CreatePostControl::MakePost,
        CreatePostControl::PhotoVideoAlbum,
        CreatePostControl::LiveVideo,
        CreatePostControl::Input,
        CreatePostControl::List,
        CreatePostControl::PhotoVideo,
        CreatePostControl::TagFriends,
    ];

    const TABS: [CreatePostControl; 3] = [
        CreatePostControl::MakePost,
        CreatePostControl::PhotoVideoAlbum,
        CreatePostControl::LiveVideo,
    ];

    const FOOTER: [CreatePostControl; 3] = [
        CreatePostControl::List,
        CreatePostControl::PhotoVideo,
        CreatePostControl::TagFriends,
    ];

    /// The name logged when the control is activated.
    pub fn action_name(self) -> &'static str {
        match self {
            CreatePostControl::MakePost => "Make Post",
            CreatePostControl::PhotoVideoAlbum => "Photo/Video Album",
            CreatePostControl::LiveVideo => "Live Video",
            CreatePostControl::Input => "What's on your mind input click",
            CreatePostControl::List => "List option",
            CreatePostControl::PhotoVideo => "Photo/Video option",
            CreatePostControl::TagFriends => "Tag Friends option",
        }
    }

    fn button(self) -> Option<(Icon, &'static str)> {
        match self {
            CreatePostControl::MakePost => Some((Icon::Pen, "Make Post")),
            CreatePostControl::PhotoVideoAlbum => Some((Icon::Images, "Photo/Video Album")),
            CreatePostControl::LiveVideo => Some((Icon::Video, "Live Video")),
            CreatePostControl::Input => None,
            CreatePostControl::List => Some((Icon::List, "List")),
            CreatePostControl::PhotoVideo => Some((Icon::ImagePlus, "Photo/Video")),
            CreatePostControl::TagFriends => Some((Icon::Tags, "Tag Friends")),
        }
    }
}

#[derive(Clone, Copy)]
pub struct CreatePostCard<'a> {
    pub user: &'a UserRef,
    pub images: &'a dyn ImageSource,
    /// Index into [`CreatePostControl::ALL`] when the card is selected.
    pub cursor: Option<usize>,
}

impl<'a> CreatePostCard<'a> {
    pub fn new(user: &'a UserRef, images: &'a dyn ImageSource) -> Self {
        Self {
            user,
            images,
            cursor: None,
        }
    }

    pub fn selected(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    fn style_for(&self, control: CreatePostControl, base: Style) -> Style {
        match self.cursor.and_then(|i| CreatePostControl::ALL.get(i)) {
            Some(c) if *c == control => base.patch(icons::cursor()),
            _ => base,
        }
    }

    fn button_row(&self, controls: [CreatePostControl; 3], width: u16) -> Line<'static> {
        let slot = width as usize / controls.len();
        let mut spans = Vec::new();
        for control in controls {
            let Some((icon, label)) = control.button() else {
                continue;
            };
            let base = if control == CreatePostControl::MakePost {
                Style::default()
                    .fg(icons::PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                icons::muted()
            };
            let style = self.style_for(control, base);
            spans.extend(centered(
                vec![icon_span(icon, style), Span::styled(format!(" {label}"), style)],
                slot,
            ));
        }
        Line::from(spans)
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let avatar = Avatar::new(&self.user.name, self.user.avatar_url.as_deref(), 2);
        let mut input = avatar.spans(self.images);
        input.push(Span::raw(" "));
        input.push(Span::styled(
            format!("What's on your mind, {}?", self.user.first_name()),
            self.style_for(CreatePostControl::Input, icons::muted()),
        ));

        vec![
            self.button_row(CreatePostControl::TABS, width),
            rule(width, icons::muted()),
            Line::from(input),
            rule(width, icons::muted()),
            self.button_row(CreatePostControl::FOOTER, width),
        ]
    }
}

impl<'a> Widget for CreatePostCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(icons::border(self.cursor.is_some()))
            .padding(Padding::horizontal(1));
        let width = area.width.saturating_sub(4);
        Paragraph::new(self.lines(width)).block(block).render(area, buf);
    }
}
