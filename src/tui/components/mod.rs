//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields and implement
//! ratatui's `Widget`:
//! - `FeedPost`: one post card
//! - `CreatePostCard`: the composer placeholder at the top of the feed
//! - `StoriesPanel`: stories list (its cursor is owned by the caller)
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `*State` struct owns local state and implements
//! `EventHandler`; a transient wrapper borrows it each frame to render:
//! - `HeaderState` / `Header`: active destination, badges
//! - `SidebarState` / `Sidebar`: Explore expand/collapse
//! - `SuggestedGroupsState` / `SuggestedGroups`: visible group cards
//! - `FeedState` / `Feed`: scroll, selection, layout cache
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into
//! `App`. Callbacks become event enums returned from `handle_event`; the
//! owner converts them into `core::action::Action` values.
//!
//! ```rust,ignore
//! let view = FeedPost::new(&post, app.images.as_ref()).selected(cursor);
//! frame.render_widget(view, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── avatar.rs           (image marker / initials fallback)
//! ├── text.rs             (wrapping and line helpers)
//! ├── header.rs           (top bar)
//! ├── sidebar.rs          (left navigation)
//! ├── feed.rs             (scrollable index page)
//! ├── feed_post.rs        (single post card)
//! ├── create_post.rs      (composer card)
//! ├── stories.rs          (stories panel)
//! └── suggested_groups.rs (group suggestions panel)
//! ```

pub mod avatar;
pub mod create_post;
pub mod feed;
pub mod feed_post;
pub mod header;
pub mod sidebar;
pub mod stories;
pub mod suggested_groups;
pub mod text;

pub use create_post::{CreatePostCard, CreatePostControl};
pub use feed::{Feed, FeedEvent, FeedState};
pub use feed_post::FeedPost;
pub use header::{Header, HeaderEvent, HeaderState};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use stories::{StoriesEvent, StoriesFocus, StoriesPanel};
pub use suggested_groups::{GroupsEvent, SuggestedGroups, SuggestedGroupsState};
