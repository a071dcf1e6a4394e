use serde::{Deserialize, Serialize};

/// Post category. Anything unknown in stored data lands in `General`, the
/// default display bucket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Alert,
    Event,
    Scheme,
    Weather,
    News,
    #[serde(other)]
    General,
}

impl Category {
    pub const SELECTABLE: [Category; 5] = [
        Category::Alert,
        Category::Event,
        Category::Scheme,
        Category::Weather,
        Category::News,
    ];

    pub fn from_id(id: &str) -> Category {
        match id.trim().to_ascii_lowercase().as_str() {
            "alert" => Category::Alert,
            "event" => Category::Event,
            "scheme" => Category::Scheme,
            "weather" => Category::Weather,
            "news" => Category::News,
            _ => Category::General,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Alert => "alert",
            Category::Event => "event",
            Category::Scheme => "scheme",
            Category::Weather => "weather",
            Category::News => "news",
            Category::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Alert => "Alert",
            Category::Event => "Event",
            Category::Scheme => "Scheme",
            Category::Weather => "Weather",
            Category::News => "News",
            Category::General => "General",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Alert => "🔌",
            Category::Event => "🎉",
            Category::Scheme => "🎁",
            Category::Weather => "🌦️",
            Category::News => "📣",
            Category::General => "📝",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Alert => "badge-red",
            Category::Event => "badge-blue",
            Category::Scheme => "badge-green",
            Category::Weather => "badge-orange",
            Category::News => "badge-purple",
            Category::General => "badge-gray",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub is_official: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
    #[serde(default)]
    pub is_liked: bool,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// What the create-post flow hands to the store; id and time label are
/// assigned there.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

/// Follower / following record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub members: u32,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub posts: u32,
    pub communities: u32,
    pub following: u32,
    pub followers: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub joined_date: String,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub followers: Vec<DirectoryEntry>,
    #[serde(default)]
    pub following: Vec<DirectoryEntry>,
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default)]
    pub stats: UserStats,
}

/// Partial profile update; `None` leaves the field as it is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// === Directory-provided records ===

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub members: u32,
    pub avatar: String,
    pub category: String,
    pub recent_activity: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CommunityEvent {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub location: String,
    pub attendees: u32,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Scheme {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityProfile {
    pub listing: CommunityListing,
    pub established: String,
    pub posts: Vec<Post>,
    pub events: Vec<CommunityEvent>,
    pub schemes: Vec<Scheme>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonProfile {
    pub entry: DirectoryEntry,
    pub bio: String,
    pub joined_date: String,
    pub stats: UserStats,
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Event,
    Scheme,
    Weather,
    Comment,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Alert => "🔌",
            NotificationKind::Event => "🎉",
            NotificationKind::Scheme => "🎁",
            NotificationKind::Weather => "🌦️",
            NotificationKind::Comment => "💬",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Post,
    Event,
    Scheme,
    Alert,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub id: u32,
    pub kind: ResultKind,
    pub title: String,
    pub content: String,
    pub author: String,
    pub location: String,
    pub time: String,
    pub category: Category,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_general() {
        let c: Category = serde_json::from_str("\"festival\"").unwrap();
        assert_eq!(c, Category::General);
        assert_eq!(Category::from_id("Weather"), Category::Weather);
    }

    #[test]
    fn user_keeps_browser_field_names() {
        let raw = r#"{"id":"u1","name":"Anjali Rao","email":"a@x.in","joinedDate":"Joined May 2025",
            "posts":[{"id":7,"title":"Hi","content":"Hello","category":"news","time":"Just now","isLiked":true}],
            "stats":{"posts":1,"communities":0,"following":0,"followers":0}}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.joined_date, "Joined May 2025");
        assert!(user.posts[0].is_liked);
        assert_eq!(user.posts[0].shares, 0);
        assert!(user.following.is_empty());

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["joinedDate"], "Joined May 2025");
        assert_eq!(back["posts"][0]["isLiked"], true);
        assert!(back["posts"][0].get("author").is_none());
    }
}
