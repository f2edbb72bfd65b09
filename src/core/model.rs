//! # Feed Data Model
//!
//! Plain data types for everything the feed renders. All of it is
//! immutable input; the few pieces of mutable UI state live in the
//! component state structs under `tui::components`.
//!
//! ```text
//! Post
//! ├── author: UserRef
//! ├── privacy: Privacy
//! ├── attachment: Option<Attachment>   // Image | Map
//! └── stats: EngagementStats
//!
//! GroupCard ── members_preview: Vec<MemberPreview>
//! StoryItem
//! NavItem ── icon: Icon
//! ```

/// A reference to a person: post author, signed-in user, story owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub name: String,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
}

impl UserRef {
    pub fn new(name: &str, avatar_url: &str, profile_url: &str) -> Self {
        Self {
            name: name.to_string(),
            avatar_url: Some(avatar_url.to_string()),
            profile_url: Some(profile_url.to_string()),
        }
    }

    /// Link target for the author block. Missing profiles link to `#`.
    pub fn link(&self) -> &str {
        self.profile_url.as_deref().unwrap_or("#")
    }

    /// First word of the name ("Olenna Mason" → "Olenna").
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

/// Who can see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privacy {
    Public,
    Friends,
    SpecificFriends,
    OnlyMe,
}

impl Privacy {
    /// Icon shown next to the post time.
    ///
    /// Only `Public` gets the globe. `OnlyMe` shares the people icon with
    /// the friends levels.
    pub fn icon(self) -> Icon {
        match self {
            Privacy::Public => Icon::Globe,
            Privacy::Friends | Privacy::SpecificFriends | Privacy::OnlyMe => Icon::Users,
        }
    }
}

/// Optional media payload of a post. Exactly one shape per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Image {
        url: String,
        alt: String,
    },
    Map {
        location_name: String,
        image_url: String,
        address: Option<String>,
        context_text: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementStats {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

impl EngagementStats {
    pub fn new(likes: u32, comments: u32, shares: u32) -> Self {
        Self {
            likes,
            comments,
            shares,
        }
    }

    /// True when every counter is zero; the counts row is hidden then.
    pub fn is_empty(&self) -> bool {
        self.likes == 0 && self.comments == 0 && self.shares == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author: UserRef,
    /// Pre-formatted display time ("2 hrs ago"). Never computed.
    pub time: String,
    pub privacy: Privacy,
    pub text: String,
    pub attachment: Option<Attachment>,
    pub stats: EngagementStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPreview {
    pub id: String,
    pub avatar_url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCard {
    pub id: String,
    pub cover_image_url: String,
    pub name: String,
    pub handle: Option<String>,
    pub member_count: u32,
    pub members_preview: Vec<MemberPreview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryItem {
    pub id: String,
    pub user_name: String,
    pub avatar_url: String,
    pub profile_url: Option<String>,
    /// Cosmetic only: changes the avatar ring and label styling.
    pub viewed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub icon: Icon,
    pub href: String,
    pub disabled: bool,
}

impl NavItem {
    pub fn new(label: &str, icon: Icon, href: &str) -> Self {
        Self {
            label: label.to_string(),
            icon,
            href: href.to_string(),
            disabled: false,
        }
    }
}

/// Icon references used across the interface.
///
/// Glyphs are picked by the renderer (`tui::icons`), the model only names
/// the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Brand,
    Search,
    Home,
    Users,
    Watch,
    Store,
    Menu,
    Messenger,
    Bell,
    Newspaper,
    Gamepad,
    Calendar,
    Flag,
    ListChecks,
    HeartHandshake,
    ChevronDown,
    ChevronRight,
    Settings,
    LogOut,
    Globe,
    More,
    ThumbsUp,
    Comment,
    Share,
    Plus,
    PlusCircle,
    Close,
    Pen,
    Images,
    Video,
    List,
    ImagePlus,
    Tags,
    Map,
    Picture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_public_uses_globe() {
        assert_eq!(Privacy::Public.icon(), Icon::Globe);
    }

    #[test]
    fn privacy_only_me_matches_friends() {
        assert_eq!(Privacy::OnlyMe.icon(), Privacy::Friends.icon());
        assert_eq!(Privacy::SpecificFriends.icon(), Icon::Users);
    }

    #[test]
    fn stats_empty_only_when_all_zero() {
        assert!(EngagementStats::default().is_empty());
        assert!(!EngagementStats::new(0, 1, 0).is_empty());
        assert!(!EngagementStats::new(0, 0, 3).is_empty());
    }

    #[test]
    fn user_link_falls_back_to_hash() {
        let user = UserRef {
            name: "Nobody".to_string(),
            avatar_url: None,
            profile_url: None,
        };
        assert_eq!(user.link(), "#");
        assert_eq!(user.first_name(), "Nobody");
    }

    #[test]
    fn first_name_splits_on_space() {
        let user = UserRef::new("Olenna Mason", "https://x/a.png", "#/profile/olenna-mason");
        assert_eq!(user.first_name(), "Olenna");
    }
}
