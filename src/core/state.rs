//! # Application State
//!
//! Business state for Plaza. Domain data only; per-component UI state
//! (active nav, explore flag, visible groups) lives with its component in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── current_user: UserRef          // signed-in user
//! ├── posts: Vec<Post>               // feed, in display order
//! ├── stories: Vec<StoryItem>        // stories panel entries
//! ├── badges: Badges                 // header unread counts
//! ├── images: Box<dyn ImageSource>   // avatar/image resolution
//! └── status_message: String         // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::image::{ImageSource, UrlImageSource};
use crate::core::model::{Post, StoryItem, UserRef};
use crate::core::sample;

/// Static unread counts shown on the header actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badges {
    pub messenger: u32,
    pub notifications: u32,
}

impl Default for Badges {
    fn default() -> Self {
        Self {
            messenger: 3,
            notifications: 17,
        }
    }
}

pub struct App {
    pub current_user: UserRef,
    pub posts: Vec<Post>,
    pub stories: Vec<StoryItem>,
    pub badges: Badges,
    pub images: Box<dyn ImageSource>,
    pub status_message: String,
}

impl App {
    pub fn new(images: Box<dyn ImageSource>) -> Self {
        Self {
            current_user: sample::current_user(),
            posts: sample::feed_posts(),
            stories: sample::stories(),
            badges: Badges::default(),
            images,
            status_message: String::from("Welcome to Plaza!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(Box::new(UrlImageSource));
        app.badges = config.badges;
        app
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }
}
