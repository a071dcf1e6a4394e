//! Directory data the client shows but does not own: communities, people,
//! notifications, the search corpus and comment threads. The mock provider
//! serves fixed data; a real source only has to implement [`DirectoryProvider`].

use crate::avatar::generate_avatar_from_name;
use crate::core::seed::{author, sample_post};
use crate::models::models::{
    Category, Comment, CommunityEvent, CommunityListing, CommunityProfile, DirectoryEntry,
    Notification, NotificationKind, PersonProfile, ResultKind, Scheme, SearchResult, UserStats,
};

pub trait DirectoryProvider {
    fn communities(&self) -> Vec<CommunityListing>;
    fn community(&self, id: &str) -> Option<CommunityProfile>;
    /// Communities a fresh communities page shows as joined.
    fn joined_by_default(&self) -> Vec<String>;
    fn people(&self) -> Vec<PersonProfile>;
    fn notifications(&self) -> Vec<Notification>;
    fn search_corpus(&self) -> Vec<SearchResult>;
    fn comments(&self, post_id: u64) -> Vec<Comment>;

    fn person(&self, id: &str) -> Option<PersonProfile> {
        self.people().into_iter().find(|p| p.entry.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockDirectory;

impl MockDirectory {
    pub fn new() -> Self {
        MockDirectory
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    description: &str,
    location: &str,
    members: u32,
    avatar: &str,
    category: &str,
    recent_activity: &str,
) -> CommunityListing {
    CommunityListing {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        members,
        avatar: avatar.to_string(),
        category: category.to_string(),
        recent_activity: recent_activity.to_string(),
    }
}

fn entry(id: &str, name: &str, avatar: &str, location: &str) -> DirectoryEntry {
    DirectoryEntry {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        location: location.to_string(),
    }
}

fn community_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: 1,
            title: "Community Clean-up Drive".to_string(),
            date: "This Saturday, 7:00 AM".to_string(),
            location: "Temple Street".to_string(),
            attendees: 45,
            description: "Join us for a community clean-up drive to make our neighborhood beautiful."
                .to_string(),
        },
        CommunityEvent {
            id: 2,
            title: "Monthly Community Meeting".to_string(),
            date: "Next Sunday, 6:00 PM".to_string(),
            location: "Community Hall".to_string(),
            attendees: 23,
            description: "Discuss community issues and upcoming projects.".to_string(),
        },
    ]
}

fn community_schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: 1,
            title: "Solar Panel Subsidy".to_string(),
            description: "Government subsidy for solar panel installation in residential areas."
                .to_string(),
            deadline: "Dec 31, 2024".to_string(),
            status: "Active".to_string(),
        },
        Scheme {
            id: 2,
            title: "Street Light Maintenance".to_string(),
            description: "Monthly street light maintenance program by local authorities."
                .to_string(),
            deadline: "Ongoing".to_string(),
            status: "Active".to_string(),
        },
    ]
}

impl DirectoryProvider for MockDirectory {
    fn communities(&self) -> Vec<CommunityListing> {
        vec![
            listing(
                "1",
                "Anna Nagar Community",
                "Connect with neighbors in Anna Nagar, Chennai. Share local news, events, and stay updated.",
                "Anna Nagar, Chennai",
                1247,
                "https://images.unsplash.com/photo-1517022812141-23620dba5c23?w=100&h=100&fit=crop",
                "Residential",
                "5 new posts today",
            ),
            listing(
                "2",
                "Thanjavur Central",
                "Official community for Thanjavur district. Get government updates and local announcements.",
                "Thanjavur, Tamil Nadu",
                3456,
                "🏛️",
                "Official",
                "New scheme announced",
            ),
            listing(
                "3",
                "Trichy Tech Hub",
                "For tech professionals and enthusiasts in Trichy. Share job opportunities and tech news.",
                "Trichy, Tamil Nadu",
                892,
                "https://images.unsplash.com/photo-1721322800607-8c38375eef04?w=100&h=100&fit=crop",
                "Professional",
                "12 new members this week",
            ),
            listing(
                "4",
                "Coimbatore Events",
                "Discover and organize events in Coimbatore. From cultural festivals to business meetups.",
                "Coimbatore, Tamil Nadu",
                2134,
                "🎪",
                "Events",
                "3 upcoming events",
            ),
            listing(
                "5",
                "Salem Green Initiative",
                "Environmental community focused on making Salem cleaner and greener.",
                "Salem, Tamil Nadu",
                567,
                "🌱",
                "Environment",
                "Tree plantation drive",
            ),
        ]
    }

    fn community(&self, id: &str) -> Option<CommunityProfile> {
        let listing = self.communities().into_iter().find(|c| c.id == id)?;
        let place = listing.name.clone();
        let posts = vec![
            sample_post(
                101,
                author("raj-kumar", "Raj Kumar", "/placeholder.svg", false),
                "Local Market Update",
                "New vegetable market opened near the temple with fresh produce daily. Great prices and quality!",
                Category::News,
                (12, 5, 2),
                "2 hours ago",
                &place,
            ),
            sample_post(
                102,
                author("priya-sharma", "Priya Sharma", "/placeholder.svg", false),
                "Clean-up Drive",
                "Community clean-up drive this Saturday at 7 AM. Let's make our neighborhood beautiful together! 🌟",
                Category::Event,
                (24, 8, 4),
                "5 hours ago",
                &place,
            ),
        ];
        Some(CommunityProfile {
            listing,
            established: "2023".to_string(),
            posts,
            events: community_events(),
            schemes: community_schemes(),
        })
    }

    fn joined_by_default(&self) -> Vec<String> {
        vec!["1".to_string(), "3".to_string()]
    }

    fn people(&self) -> Vec<PersonProfile> {
        let priya = entry(
            "priya-sharma",
            "Priya Sharma",
            "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=100&h=100&fit=crop&crop=face",
            "Anna Nagar, Chennai",
        );
        let priya_post = sample_post(
            201,
            author(&priya.id, &priya.name, &priya.avatar, false),
            "Power Cut Alert",
            "🚨 Power cut scheduled in Anna Nagar from 10 AM to 2 PM today for maintenance work. Please plan accordingly!",
            Category::Alert,
            (23, 5, 12),
            "2 hours ago",
            "Anna Nagar, Chennai",
        );
        vec![
            PersonProfile {
                entry: priya,
                bio: "Community volunteer and local business owner".to_string(),
                joined_date: "Joined March 2023".to_string(),
                stats: UserStats { posts: 42, communities: 5, followers: 128, following: 67 },
                posts: vec![priya_post],
            },
            PersonProfile {
                entry: entry(
                    "raj-kumar",
                    "Raj Kumar",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
                    "Thanjavur",
                ),
                bio: "Organizer of the temple festival committee".to_string(),
                joined_date: "Joined January 2024".to_string(),
                stats: UserStats { posts: 18, communities: 3, followers: 96, following: 40 },
                posts: Vec::new(),
            },
            PersonProfile {
                entry: entry(
                    "dr-lakshmi",
                    "Dr. Lakshmi",
                    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=100&h=100&fit=crop&crop=face",
                    "Trichy",
                ),
                bio: "Physician sharing health and weather advisories".to_string(),
                joined_date: "Joined June 2023".to_string(),
                stats: UserStats { posts: 27, communities: 2, followers: 310, following: 12 },
                posts: Vec::new(),
            },
            PersonProfile {
                entry: entry("tn-govt", "Tamil Nadu Govt", "🏛️", "Tamil Nadu"),
                bio: "Official announcements and schemes".to_string(),
                joined_date: "Joined January 2023".to_string(),
                stats: UserStats { posts: 240, communities: 12, followers: 5400, following: 0 },
                posts: Vec::new(),
            },
        ]
    }

    fn notifications(&self) -> Vec<Notification> {
        let n = |id, kind, title: &str, message: &str, time: &str, unread| Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            unread,
        };
        vec![
            n(1, NotificationKind::Alert, "Power Cut Alert", "Scheduled power cut in your area from 10 AM to 2 PM", "2 hours ago", true),
            n(2, NotificationKind::Event, "Community Meeting", "Monthly community meeting scheduled for this Saturday", "5 hours ago", true),
            n(3, NotificationKind::Scheme, "New Government Scheme", "Solar panel subsidy scheme now available in your area", "1 day ago", false),
            n(4, NotificationKind::Weather, "Weather Alert", "Heavy rainfall expected in your area tomorrow", "1 day ago", false),
            n(5, NotificationKind::Comment, "New Comment", "Someone commented on your post about local market", "2 days ago", false),
        ]
    }

    fn search_corpus(&self) -> Vec<SearchResult> {
        let r = |id, kind, title: &str, content: &str, author: &str, location: &str, time: &str, category, likes, comments| {
            SearchResult {
                id,
                kind,
                title: title.to_string(),
                content: content.to_string(),
                author: author.to_string(),
                location: location.to_string(),
                time: time.to_string(),
                category,
                likes,
                comments,
            }
        };
        vec![
            r(1, ResultKind::Post, "Local Market Update", "New vegetable market opened near the temple with fresh produce...", "John Doe", "Thanjavur Central", "2 hours ago", Category::News, 12, 5),
            r(2, ResultKind::Event, "Community Clean-up Drive", "Join us this Saturday for a community clean-up drive starting at 7 AM...", "Community Admin", "Temple Street", "1 day ago", Category::Event, 24, 8),
            r(3, ResultKind::Scheme, "Solar Panel Subsidy", "Government announces new solar panel subsidy scheme for residential areas...", "Government Official", "Thanjavur District", "2 days ago", Category::Scheme, 45, 12),
            r(4, ResultKind::Alert, "Power Cut Alert", "Scheduled power cut tomorrow from 10 AM to 2 PM in the following areas...", "TNEB Official", "Multiple Areas", "3 hours ago", Category::Alert, 8, 3),
        ]
    }

    fn comments(&self, _post_id: u64) -> Vec<Comment> {
        vec![
            Comment {
                id: 1,
                author: "Sarah Johnson".to_string(),
                avatar: generate_avatar_from_name("Sarah Johnson"),
                content: "This is really helpful information, thank you for sharing!".to_string(),
                timestamp: "2 hours ago".to_string(),
            },
            Comment {
                id: 2,
                author: "Michael Chen".to_string(),
                avatar: generate_avatar_from_name("Michael Chen"),
                content: "Great post! I was looking for this information.".to_string(),
                timestamp: "1 hour ago".to_string(),
            },
        ]
    }
}
