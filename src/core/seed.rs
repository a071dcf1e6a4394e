use crate::models::models::{Author, Category, Post};

const PRIYA_AVATAR: &str =
    "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=100&h=100&fit=crop&crop=face";
const RAJ_AVATAR: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face";
const LAKSHMI_AVATAR: &str =
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=100&h=100&fit=crop&crop=face";

pub(crate) fn author(id: &str, name: &str, avatar: &str, is_official: bool) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        is_official,
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn sample_post(
    id: u64,
    author: Author,
    title: &str,
    content: &str,
    category: Category,
    (likes, comments, shares): (u32, u32, u32),
    time: &str,
    location: &str,
) -> Post {
    Post {
        id,
        author: Some(author),
        title: title.to_string(),
        content: content.to_string(),
        category,
        likes,
        comments,
        shares,
        is_liked: false,
        time: time.to_string(),
        created_at: None,
        location: Some(location.to_string()),
        image: None,
        video: None,
    }
}

/// Posts every session's global feed starts with, newest first.
pub fn sample_feed() -> Vec<Post> {
    let mut festival = sample_post(
        2,
        author("raj-kumar", "Raj Kumar", RAJ_AVATAR, false),
        "Community Festival",
        "🎉 Community temple festival this Saturday! Everyone is invited to join the celebrations. Food stalls and cultural programs starting at 6 PM.",
        Category::Event,
        (47, 12, 8),
        "4 hours ago",
        "Thanjavur",
    );
    festival.is_liked = true;
    festival.image = Some(
        "https://images.unsplash.com/photo-1466442929976-97f336a657be?w=500&h=300&fit=crop"
            .to_string(),
    );

    let mut rain = sample_post(
        4,
        author("dr-lakshmi", "Dr. Lakshmi", LAKSHMI_AVATAR, false),
        "Heavy Rain Expected",
        "🌦️ Heavy rain expected this weekend. Please avoid waterlogged areas and stay safe. Emergency helpline: 1077",
        Category::Weather,
        (67, 15, 25),
        "8 hours ago",
        "Trichy",
    );
    rain.is_liked = true;

    vec![
        sample_post(
            1,
            author("priya-sharma", "Priya Sharma", PRIYA_AVATAR, false),
            "Power Cut Alert",
            "🚨 Power cut scheduled in Anna Nagar from 10 AM to 2 PM today for maintenance work. Please plan accordingly!",
            Category::Alert,
            (23, 5, 12),
            "2 hours ago",
            "Anna Nagar, Chennai",
        ),
        festival,
        sample_post(
            3,
            author("tn-govt", "Tamil Nadu Govt", "🏛️", true),
            "Solar Subsidy Scheme",
            "📢 New subsidy scheme for solar panels launched! Apply online before March 31st. Up to ₹50,000 subsidy available for residential installations.",
            Category::Scheme,
            (156, 34, 89),
            "6 hours ago",
            "Tamil Nadu",
        ),
        rain,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_has_distinct_ids_and_authors() {
        let feed = sample_feed();
        assert_eq!(feed.len(), 4);
        let mut ids: Vec<u64> = feed.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(feed.iter().all(|p| p.author.is_some()));
    }
}
