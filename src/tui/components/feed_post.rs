//! # FeedPost Component
//!
//! Renders a single post as a bordered card:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ (JU) Julia Fillory                     ⋯ │
//! │      2 hrs ago · 👥                      │
//! │                                          │
//! │ Checking out some new stores downtown!   │
//! │                                          │
//! │ ┌──────────────────────────────────────┐ │
//! │ │ 🖼 Cozy cafe interior with a cup ...  │ │
//! │ └──────────────────────────────────────┘ │
//! │ 125 Likes           18 Comments  5 Shares│
//! │ ──────────────────────────────────────── │
//! │    👍 Like      💬 Comment     ↗ Share   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! `FeedPost` is a transient, stateless component: it is created each
//! frame from a borrowed `Post`. Whether it is selected, and which action
//! button the cursor is on, come in as props from `FeedState`.
//!
//! Every optional piece of a post suppresses its own fragment when absent:
//! empty body text, missing attachment, missing map address or caption,
//! and an all-zero counts row are simply not drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::action::PostActionKind;
use crate::core::format::format_count;
use crate::core::image::{ImageSource, NoImages};
use crate::core::model::{Attachment, EngagementStats, Icon, Post};
use crate::tui::components::avatar::Avatar;
use crate::tui::components::text::{centered, framed, rule, spread, wrapped_lines};
use crate::tui::icons::{self, icon_span};

/// Horizontal padding (per side) between the border and the content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders and padding.
pub const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders.
pub const VERTICAL_OVERHEAD: u16 = 2;

#[derive(Clone, Copy)]
pub struct FeedPost<'a> {
    pub post: &'a Post,
    pub images: &'a dyn ImageSource,
    pub is_selected: bool,
    /// Highlighted action button, only drawn when selected.
    pub action_cursor: usize,
}

impl<'a> FeedPost<'a> {
    pub fn new(post: &'a Post, images: &'a dyn ImageSource) -> Self {
        Self {
            post,
            images,
            is_selected: false,
            action_cursor: 0,
        }
    }

    pub fn selected(mut self, action_cursor: usize) -> Self {
        self.is_selected = true;
        self.action_cursor = action_cursor;
        self
    }

    /// Height of the card at `width`, borders included.
    ///
    /// Computed from the same lines `render` draws, so the two always
    /// agree. Avatar resolution does not change the line count.
    pub fn calculate_height(post: &Post, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD + 1;
        }
        let lines = FeedPost::new(post, &NoImages).lines(content_width);
        lines.len() as u16 + VERTICAL_OVERHEAD
    }

    /// All content lines, pre-wrapped to `width` columns.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = self.author_lines(width);

        if !self.post.text.is_empty() {
            lines.push(Line::default());
            lines.extend(wrapped_lines(&self.post.text, width, Style::default()));
        }

        if let Some(attachment) = &self.post.attachment {
            lines.push(Line::default());
            lines.extend(attachment_lines(attachment, width));
        }

        let counts = counts_lines(&self.post.stats, width);
        if counts.is_empty() {
            lines.push(Line::default());
        } else {
            lines.extend(counts);
            lines.push(rule(width, icons::muted()));
        }

        lines.push(self.actions_line(width));
        lines
    }

    fn author_lines(&self, width: u16) -> Vec<Line<'static>> {
        let author = &self.post.author;
        let avatar = Avatar::new(&author.name, author.avatar_url.as_deref(), 2);
        let mut left = avatar.spans(self.images);
        let avatar_width: usize = left.iter().map(|s| s.width()).sum();
        left.push(Span::raw(" "));
        left.push(Span::styled(author.name.clone(), icons::bold()));

        let name_line = spread(left, vec![icon_span(Icon::More, icons::muted())], width);

        let time_line = Line::from(vec![
            Span::raw(" ".repeat(avatar_width + 1)),
            Span::styled(self.post.time.clone(), icons::muted()),
            Span::styled(" · ", icons::muted()),
            icon_span(self.post.privacy.icon(), icons::muted()),
        ]);

        vec![name_line, time_line]
    }

    fn actions_line(&self, width: u16) -> Line<'static> {
        let slot = width as usize / PostActionKind::ALL.len();
        let mut spans = Vec::new();
        for (i, kind) in PostActionKind::ALL.into_iter().enumerate() {
            let style = if self.is_selected && i == self.action_cursor {
                icons::cursor()
            } else {
                icons::muted().add_modifier(Modifier::BOLD)
            };
            let button = vec![
                icon_span(action_icon(kind), style),
                Span::styled(format!(" {}", kind.label()), style),
            ];
            spans.extend(centered(button, slot));
        }
        Line::from(spans)
    }
}

fn action_icon(kind: PostActionKind) -> Icon {
    match kind {
        PostActionKind::Like => Icon::ThumbsUp,
        PostActionKind::Comment => Icon::Comment,
        PostActionKind::Share => Icon::Share,
    }
}

/// The framed attachment block, one layout per attachment shape.
pub fn attachment_lines(attachment: &Attachment, width: u16) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let mut content = Vec::new();

    match attachment {
        Attachment::Image { alt, .. } => {
            let alt_style = icons::muted().add_modifier(Modifier::ITALIC);
            let mut alt_lines = wrapped_lines(alt, inner.saturating_sub(3), alt_style);
            if let Some(first) = alt_lines.first_mut() {
                first.spans.insert(0, Span::raw(" "));
                first.spans.insert(0, icon_span(Icon::Picture, Style::default()));
            }
            for line in alt_lines.iter_mut().skip(1) {
                line.spans.insert(0, Span::raw("   "));
            }
            content.extend(alt_lines);
        }
        Attachment::Map {
            location_name,
            address,
            context_text,
            ..
        } => {
            let fill = (inner as usize).saturating_sub(3);
            content.push(Line::from(vec![
                icon_span(Icon::Map, Style::default()),
                Span::raw(" "),
                Span::styled("░".repeat(fill), icons::muted()),
            ]));
            content.extend(wrapped_lines(location_name, inner, icons::bold()));
            if let Some(address) = address {
                content.extend(wrapped_lines(address, inner, icons::muted()));
            }
            if let Some(context) = context_text {
                content.extend(wrapped_lines(context, inner, icons::muted()));
            }
        }
    }

    framed(content, width, icons::muted())
}

/// The "N Likes ... N Comments N Shares" row; empty when all are zero.
///
/// When the two groups don't share one line, the nonzero counts are packed
/// left-aligned with `·` separators over as many lines as needed.
pub fn counts_lines(stats: &EngagementStats, width: u16) -> Vec<Line<'static>> {
    let label = |n: u32, noun: &str| (n > 0).then(|| format!("{} {noun}", format_count(n)));
    let likes = label(stats.likes, "Likes");
    let others: Vec<String> = [label(stats.comments, "Comments"), label(stats.shares, "Shares")]
        .into_iter()
        .flatten()
        .collect();
    if likes.is_none() && others.is_empty() {
        return Vec::new();
    }

    let right_text = others.join("  ");
    let left_width = likes.as_deref().map_or(0, UnicodeWidthStr::width);
    if left_width + right_text.width() < width as usize {
        let left = likes.map(|l| Span::styled(l, icons::muted())).into_iter().collect();
        let right = vec![Span::styled(right_text, icons::muted())];
        return vec![spread(left, right, width)];
    }

    let mut rows: Vec<String> = Vec::new();
    for count in likes.into_iter().chain(others) {
        match rows.last_mut() {
            Some(row) if row.width() + 3 + count.width() <= width as usize => {
                row.push_str(" · ");
                row.push_str(&count);
            }
            _ => rows.push(count),
        }
    }
    rows.into_iter()
        .map(|row| Line::from(Span::styled(row, icons::muted())))
        .collect()
}

impl<'a> Widget for FeedPost<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = icons::border(self.is_selected);
        let block = Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let content_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        Paragraph::new(self.lines(content_width))
            .block(block)
            .render(area, buf);
    }
}
