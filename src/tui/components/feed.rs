//! # Feed Component
//!
//! The index page: the create-post card followed by every post in order,
//! inside a vertical `ScrollView`. No pagination or lazy loading.
//!
//! ## Architecture
//!
//! `Feed` is transient (created each frame) and wraps `&'a mut FeedState`
//! plus the post slice as props. `Component::render` takes `&mut self`, so
//! the render pass refreshes the height cache and clamps the scroll offset.
//!
//! Item 0 is always the create-post card; item `i + 1` is post `i`.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::PostActionKind;
use crate::core::image::ImageSource;
use crate::core::model::{Post, UserRef};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::create_post::{CREATE_POST_HEIGHT, CreatePostCard, CreatePostControl};
use crate::tui::components::feed_post::FeedPost;
use crate::tui::event::TuiEvent;

/// Blank rows below each card.
const ITEM_GAP: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    CreatePost(CreatePostControl),
    Post { post_id: String, kind: PostActionKind },
}

/// Scroll and selection state for the feed.
/// Must be persisted in the parent TuiState.
pub struct FeedState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Selected item; 0 is the create-post card.
    pub selected: usize,
    /// Control or action button under the cursor within the selected item.
    pub action_cursor: usize,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    post_ids: Vec<String>,
}

impl FeedState {
    pub fn new(posts: &[Post]) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            selected: 0,
            action_cursor: 0,
            viewport_height: 0,
            post_ids: posts.iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.post_ids.len() + 1
    }

    fn control_count(&self) -> usize {
        if self.selected == 0 {
            CreatePostControl::ALL.len()
        } else {
            PostActionKind::ALL.len()
        }
    }

    fn select(&mut self, index: usize) {
        let index = index.min(self.item_count() - 1);
        if index != self.selected {
            self.selected = index;
            self.action_cursor = 0;
            self.scroll_to_selected();
        }
    }

    /// What activating the current cursor position would emit.
    pub fn current_event(&self) -> Option<FeedEvent> {
        if self.selected == 0 {
            let control = *CreatePostControl::ALL.get(self.action_cursor)?;
            return Some(FeedEvent::CreatePost(control));
        }
        let post_id = self.post_ids.get(self.selected - 1)?.clone();
        let kind = *PostActionKind::ALL.get(self.action_cursor)?;
        Some(FeedEvent::Post { post_id, kind })
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Scroll the viewport so the selected item is fully visible.
    /// If the item is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some((top, bottom)) = self.layout.bounds(self.selected) else {
            return;
        };
        let offset_y = self.scroll_state.offset().y;
        if top < offset_y || bottom - top > self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

impl EventHandler for FeedState {
    type Event = FeedEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FeedEvent> {
        match event {
            TuiEvent::Up => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::Down => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Left => {
                self.action_cursor = self.action_cursor.saturating_sub(1);
                None
            }
            TuiEvent::Right => {
                self.action_cursor = (self.action_cursor + 1).min(self.control_count() - 1);
                None
            }
            TuiEvent::Submit => {
                let event = self.current_event();
                debug!("Feed activation: {:?}", event);
                event
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Item heights (gap included) for one content width.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    content_width: u16,
}

impl LayoutCache {
    pub fn is_valid(&self, item_count: usize, content_width: u16) -> bool {
        self.content_width == content_width && self.heights.len() == item_count
    }

    pub fn rebuild(&mut self, heights: Vec<u16>, content_width: u16) {
        self.heights = heights;
        self.content_width = content_width;
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    pub fn total(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Top and bottom row of item `idx`.
    pub fn bounds(&self, idx: usize) -> Option<(u16, u16)> {
        let bottom = *self.prefix_heights.get(idx)?;
        Some((bottom - self.heights[idx], bottom))
    }
}

/// Scrollable feed view.
/// Created fresh each frame with references to state and data.
pub struct Feed<'a> {
    pub state: &'a mut FeedState,
    pub user: &'a UserRef,
    pub posts: &'a [Post],
    pub images: &'a dyn ImageSource,
    pub focused: bool,
}

impl<'a> Component for Feed<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let item_count = self.posts.len() + 1;

        if !self.state.layout.is_valid(item_count, content_width) {
            let heights = std::iter::once(CREATE_POST_HEIGHT)
                .chain(self.posts.iter().map(|p| FeedPost::calculate_height(p, content_width)))
                .map(|h| h + ITEM_GAP)
                .collect();
            self.state.layout.rebuild(heights, content_width);
        }

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.layout.total();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let selected = self.focused.then_some(self.state.selected);
        let cursor = self.state.action_cursor;

        for idx in 0..item_count {
            let Some((top, bottom)) = self.state.layout.bounds(idx) else {
                continue;
            };
            let rect = Rect::new(0, top, content_width, bottom - top - ITEM_GAP);
            if idx == 0 {
                let mut card = CreatePostCard::new(self.user, self.images);
                if selected == Some(0) {
                    card = card.selected(cursor);
                }
                scroll_view.render_widget(card, rect);
            } else {
                let mut post = FeedPost::new(&self.posts[idx - 1], self.images);
                if selected == Some(idx) {
                    post = post.selected(cursor);
                }
                scroll_view.render_widget(post, rect);
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::NoImages;
    use crate::core::sample;
    use crate::test_support::{buffer_text, render_to_buffer};

    fn render_feed(state: &mut FeedState, posts: &[Post], height: u16) -> String {
        let user = sample::current_user();
        let buffer = render_to_buffer(73, height, |f| {
            let area = f.area();
            Feed {
                state,
                user: &user,
                posts,
                images: &NoImages,
                focused: true,
            }
            .render(f, area);
        });
        buffer_text(&buffer)
    }

    #[test]
    fn create_card_comes_first() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        let text = render_feed(&mut state, &posts, 20);
        assert!(text.contains("What's on your mind, Olenna?"));
        assert!(text.contains("Julia Fillory"));
        assert!(!text.contains("Sophia Chen"));
    }

    #[test]
    fn posts_render_in_order() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        let text = render_feed(&mut state, &posts, 200);
        let positions: Vec<usize> = ["Julia Fillory", "Bryan Durand", "Alex Green", "Sophia Chen"]
            .iter()
            .map(|name| text.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn layout_covers_every_item() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        render_feed(&mut state, &posts, 20);
        assert_eq!(state.layout.heights.len(), 5);
        assert_eq!(state.layout.heights[0], CREATE_POST_HEIGHT + ITEM_GAP);
        assert_eq!(
            state.layout.heights[1],
            FeedPost::calculate_height(&posts[0], 72) + ITEM_GAP
        );
    }

    #[test]
    fn selecting_down_scrolls_into_view() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        render_feed(&mut state, &posts, 20);
        for _ in 0..4 {
            state.handle_event(&TuiEvent::Down);
        }
        assert_eq!(state.selected, 4);
        assert!(state.scroll_state.offset().y > 0);
        let text = render_feed(&mut state, &posts, 20);
        assert!(text.contains("Sophia Chen"));
    }

    #[test]
    fn submit_on_create_card_names_control() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        for _ in 0..2 {
            state.handle_event(&TuiEvent::Right);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(FeedEvent::CreatePost(CreatePostControl::LiveVideo))
        );
    }

    #[test]
    fn submit_on_post_carries_id_and_kind() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        state.handle_event(&TuiEvent::Down);
        state.handle_event(&TuiEvent::Down);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::Right);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(FeedEvent::Post {
                post_id: "post2".to_string(),
                kind: PostActionKind::Share,
            })
        );
    }

    #[test]
    fn changing_item_resets_action_cursor() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        state.handle_event(&TuiEvent::Right);
        state.handle_event(&TuiEvent::Down);
        assert_eq!(state.action_cursor, 0);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let posts = sample::feed_posts();
        let mut state = FeedState::new(&posts);
        render_feed(&mut state, &posts, 20);
        for _ in 0..50 {
            state.handle_event(&TuiEvent::PageDown);
        }
        let max_y = state.layout.total() - 20;
        assert!(state.scroll_state.offset().y <= max_y);
    }
}
