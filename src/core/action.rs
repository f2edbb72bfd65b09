//! # Actions
//!
//! Everything that can happen in Plaza becomes an `Action`.
//! User activates "Join Group"? That's `Action::JoinGroup(id)`.
//! User presses `q`? That's `Action::Quit`.
//!
//! Components own their local state and change it themselves (a dismissed
//! group is already gone from the panel by the time its action arrives).
//! What reaches `update()` is the forwarded callback: it gets logged and
//! reflected in the status line. No I/O beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use log::info;

use crate::core::state::App;

/// The three per-post engagement buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostActionKind {
    Like,
    Comment,
    Share,
}

impl PostActionKind {
    pub const ALL: [PostActionKind; 3] = [
        PostActionKind::Like,
        PostActionKind::Comment,
        PostActionKind::Share,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PostActionKind::Like => "Like",
            PostActionKind::Comment => "Comment",
            PostActionKind::Share => "Share",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Header center destination activated.
    Navigate(String),
    /// Header action button (Menu, Messenger, Notifications, profile).
    HeaderAction(String),
    /// Sidebar link followed (no routing, just recorded).
    FollowLink(String),
    /// Explore section expanded (`true`) or collapsed.
    ExploreToggled(bool),
    /// Sidebar control that is not a link (Settings, Logout, shortcuts "See More").
    SidebarAction(String),
    /// Create-post card control; carries the logged action name.
    CreatePost(String),
    PostAction {
        post_id: String,
        kind: PostActionKind,
    },
    JoinGroup(String),
    DismissGroup(String),
    SeeAllGroups,
    AddStory,
    StoryArchive,
    StorySettings,
    ViewStory(String),
    SeeAllStories,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let status = match &action {
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
        Action::Navigate(label) => label.clone(),
        Action::HeaderAction(label) => format!("{label} opened"),
        Action::FollowLink(href) => format!("Link: {href}"),
        Action::ExploreToggled(true) => "Explore expanded".to_string(),
        Action::ExploreToggled(false) => "Explore collapsed".to_string(),
        Action::SidebarAction(label) => label.clone(),
        Action::CreatePost(name) => format!("Initiate \"{name}\" action..."),
        Action::PostAction { post_id, kind } => {
            let author = app
                .post(post_id)
                .map(|p| p.author.name.as_str())
                .unwrap_or("unknown");
            format!("{} · {}'s post", kind.label(), author)
        }
        Action::JoinGroup(id) => format!("Join requested: {id}"),
        Action::DismissGroup(id) => format!("Suggestion dismissed: {id}"),
        Action::SeeAllGroups => "See all groups".to_string(),
        Action::AddStory => "Add to your story".to_string(),
        Action::StoryArchive => "Story archive".to_string(),
        Action::StorySettings => "Story settings".to_string(),
        Action::ViewStory(id) => {
            let name = app
                .stories
                .iter()
                .find(|s| &s.id == id)
                .map(|s| s.user_name.as_str())
                .unwrap_or(id.as_str());
            format!("Viewing {name}'s story")
        }
        Action::SeeAllStories => "See all stories".to_string(),
    };

    info!("{:?} → {}", action, status);
    app.status_message = status;
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        // Quit leaves the status line alone
        assert_eq!(app.status_message, "Welcome to Plaza!");
    }

    #[test]
    fn test_create_post_logs_action_name() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CreatePost("Live Video".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "Initiate \"Live Video\" action...");
    }

    #[test]
    fn test_post_action_names_author() {
        let mut app = test_app();
        update(
            &mut app,
            Action::PostAction {
                post_id: "post4".to_string(),
                kind: PostActionKind::Like,
            },
        );
        assert_eq!(app.status_message, "Like · Sophia Chen's post");
    }

    #[test]
    fn test_post_action_does_not_touch_posts() {
        let mut app = test_app();
        let before = app.posts.clone();
        for kind in PostActionKind::ALL {
            update(
                &mut app,
                Action::PostAction {
                    post_id: "post1".to_string(),
                    kind,
                },
            );
        }
        assert_eq!(app.posts, before);
    }

    #[test]
    fn test_duplicate_dismiss_is_tolerated() {
        let mut app = test_app();
        update(&mut app, Action::DismissGroup("group1".to_string()));
        let effect = update(&mut app, Action::DismissGroup("group1".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "Suggestion dismissed: group1");
    }

    #[test]
    fn test_view_story_uses_user_name() {
        let mut app = test_app();
        update(&mut app, Action::ViewStory("s_item2".to_string()));
        assert_eq!(app.status_message, "Viewing John Smith's story");
    }

    #[test]
    fn test_update_only_rewrites_status_line() {
        let mut app = test_app();
        let (posts, stories, badges) = (app.posts.clone(), app.stories.clone(), app.badges);
        update(&mut app, Action::SeeAllStories);
        assert_eq!(app.status_message, "See all stories");
        assert_eq!(app.posts, posts);
        assert_eq!(app.stories, stories);
        assert_eq!(app.badges, badges);
    }
}
