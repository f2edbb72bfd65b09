//! Hard-coded sample content. Every list here is built fresh on each call
//! and never mutated by the app itself.

use crate::core::model::{
    Attachment, EngagementStats, GroupCard, Icon, MemberPreview, NavItem, Post, Privacy,
    StoryItem, UserRef,
};

pub fn current_user() -> UserRef {
    UserRef::new(
        "Olenna Mason",
        "https://i.pravatar.cc/40?u=olennamason",
        "#/profile/olenna-mason",
    )
}

pub fn feed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post1".to_string(),
            author: UserRef::new(
                "Julia Fillory",
                "https://i.pravatar.cc/40?u=juliafillory",
                "#/profile/juliafillory",
            ),
            time: "2 hrs ago".to_string(),
            privacy: Privacy::Friends,
            text: "Checking out some new stores downtown! This place has the best coffee ☕ and such a cozy atmosphere. Perfect for a rainy day read. 📖".to_string(),
            attachment: Some(Attachment::Image {
                url: "https://picsum.photos/seed/feedimage1/580/420".to_string(),
                alt: "Cozy cafe interior with a cup of coffee on a wooden table.".to_string(),
            }),
            stats: EngagementStats::new(125, 18, 5),
        },
        Post {
            id: "post2".to_string(),
            author: UserRef::new(
                "Bryan Durand",
                "https://i.pravatar.cc/40?u=bryandurand",
                "#/profile/bryandurand",
            ),
            time: "5 hrs ago".to_string(),
            privacy: Privacy::Public,
            text: "Just visited Raleigh, North Carolina. What a beautiful city! Loved the historic architecture and vibrant atmosphere. Definitely recommend the Art Museum and the State Capitol tour.".to_string(),
            attachment: Some(Attachment::Map {
                location_name: "Raleigh, North Carolina".to_string(),
                image_url: "https://picsum.photos/seed/mapraleigh/580/320".to_string(),
                address: Some("City - United States".to_string()),
                context_text: Some("Bryan Durand and 2 others have been here".to_string()),
            }),
            stats: EngagementStats::new(230, 45, 12),
        },
        Post {
            id: "post3".to_string(),
            author: UserRef::new(
                "Alex Green",
                "https://i.pravatar.cc/40?u=alexgreen",
                "#/profile/alexgreen",
            ),
            time: "1 day ago".to_string(),
            privacy: Privacy::Public,
            text: "Excited to announce I'm starting a new project! It involves machine learning and sustainable energy. Aiming to build a predictive model for solar panel efficiency based on weather patterns. More details to come soon. #innovation #ai #sustainability #cleanenergy 🌍💡".to_string(),
            attachment: None,
            stats: EngagementStats::new(88, 22, 9),
        },
        Post {
            id: "post4".to_string(),
            author: UserRef::new(
                "Sophia Chen",
                "https://i.pravatar.cc/40?u=sophiachen",
                "#/profile/sophiachen",
            ),
            time: "3 days ago".to_string(),
            privacy: Privacy::Friends,
            text: "My new puppy is finally home! Everyone, meet Leo. 🐾 Isn't he adorable?\nHe's a golden retriever and already loves chasing his tail. Can't wait for all our adventures together! Any puppy training tips are welcome! 👇".to_string(),
            attachment: Some(Attachment::Image {
                url: "https://picsum.photos/seed/puppy_leo/580/700".to_string(),
                alt: "A cute golden retriever puppy playing in the grass.".to_string(),
            }),
            stats: EngagementStats::new(540, 150, 25),
        },
    ]
}

fn member(id: &str, seed: &str, name: &str) -> MemberPreview {
    MemberPreview {
        id: id.to_string(),
        avatar_url: format!("https://picsum.photos/seed/{seed}/40/40"),
        name: name.to_string(),
    }
}

pub fn suggested_groups() -> Vec<GroupCard> {
    vec![
        GroupCard {
            id: "group1".to_string(),
            cover_image_url: "https://picsum.photos/seed/madmencover/300/100".to_string(),
            name: "Mad Men Fans".to_string(),
            handle: Some("MADdicts".to_string()),
            member_count: 6195,
            members_preview: vec![
                member("m1", "member1", "Don D."),
                member("m2", "member2", "Peggy O."),
                member("m3", "member3", "Roger S."),
                member("m4", "member4", "Joan H."),
                member("m5", "member5", "Pete C."),
            ],
        },
        GroupCard {
            id: "group2".to_string(),
            cover_image_url: "https://picsum.photos/seed/dextercover/300/100".to_string(),
            name: "Dexter - Crime Enthusiasts".to_string(),
            handle: None,
            member_count: 6984,
            members_preview: vec![
                member("d1", "memberA", "Dexter M."),
                member("d2", "memberB", "Debra M."),
                member("d3", "memberC", "Angel B."),
                member("d4", "memberD", "Rita B."),
            ],
        },
    ]
}

fn story(id: &str, name: &str, seed: &str, viewed: bool) -> StoryItem {
    StoryItem {
        id: id.to_string(),
        user_name: name.to_string(),
        avatar_url: format!("https://picsum.photos/seed/{seed}/40/40"),
        profile_url: Some("#".to_string()),
        viewed,
    }
}

pub fn stories() -> Vec<StoryItem> {
    vec![
        story("s_item1", "Jane Doe", "sitem1avatar", false),
        story("s_item2", "John Smith", "sitem2avatar", true),
        story("s_item3", "Alice Brown", "sitem3avatar", false),
    ]
}

/// Center destinations of the header, in display order.
pub fn header_destinations() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", Icon::Home, "#/"),
        NavItem::new("Friends", Icon::Users, "#/friends"),
        NavItem::new("Watch", Icon::Watch, "#/watch"),
        NavItem::new("Marketplace", Icon::Store, "#/marketplace"),
        NavItem::new("Groups", Icon::Users, "#/groups"),
    ]
}

/// Link the sidebar treats as the current page.
pub const SIDEBAR_ACTIVE_PATH: &str = "#/news-feed";

pub fn sidebar_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("News Feed", Icon::Newspaper, "#/news-feed"),
        NavItem::new("Messenger", Icon::Messenger, "#/messenger"),
        NavItem::new("Watch", Icon::Watch, "#/watch"),
        NavItem::new("Marketplace", Icon::Store, "#/marketplace"),
    ]
}

pub fn shortcuts() -> Vec<NavItem> {
    vec![NavItem::new(
        "FarmVille 2",
        Icon::Gamepad,
        "#/shortcuts/farmville",
    )]
}

pub fn explore_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Events", Icon::Calendar, "#/explore/events"),
        NavItem::new("Pages", Icon::Flag, "#/explore/pages"),
        NavItem::new("Groups", Icon::Users, "#/explore/groups"),
        NavItem::new("Friend Lists", Icon::ListChecks, "#/explore/friend-lists"),
        NavItem::new("Fundraisers", Icon::HeartHandshake, "#/explore/fundraisers"),
    ]
}

pub const CREATE_ITEMS: [&str; 5] = ["Ad", "Page", "Group", "Event", "Fundraiser"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_keep_declared_order() {
        let ids: Vec<String> = feed_posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["post1", "post2", "post3", "post4"]);
    }

    #[test]
    fn every_post_has_at_most_one_attachment_shape() {
        for post in feed_posts() {
            match &post.attachment {
                None => assert_eq!(post.id, "post3"),
                Some(Attachment::Image { url, .. }) => assert!(url.starts_with("https://")),
                Some(Attachment::Map { location_name, .. }) => {
                    assert_eq!(location_name, "Raleigh, North Carolina")
                }
            }
        }
    }

    #[test]
    fn groups_start_with_two_entries() {
        let groups = suggested_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].handle.as_deref(), Some("MADdicts"));
        assert!(groups[1].handle.is_none());
    }

    #[test]
    fn explore_has_five_items() {
        assert_eq!(explore_items().len(), 5);
    }

    #[test]
    fn only_one_story_is_viewed() {
        let viewed: Vec<_> = stories().into_iter().filter(|s| s.viewed).collect();
        assert_eq!(viewed.len(), 1);
        assert_eq!(viewed[0].user_name, "John Smith");
    }
}
