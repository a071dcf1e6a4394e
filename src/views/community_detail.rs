use crate::core::helpers::format_count;
use crate::directory::DirectoryProvider;
use crate::models::models::{Category, CommunityEvent, CommunityProfile, Post, Scheme};
use crate::store::StoreView;
use crate::views::{avatar_html, empty_state, esc, post_card, tab_bar, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Posts,
    Events,
    News,
    Schemes,
}

impl Tab {
    const ALL: [(&'static str, &'static str); 4] = [
        ("posts", "Posts"),
        ("events", "Events"),
        ("news", "News"),
        ("schemes", "Schemes"),
    ];

    pub fn from_id(id: &str) -> Tab {
        match id {
            "events" => Tab::Events,
            "news" => Tab::News,
            "schemes" => Tab::Schemes,
            _ => Tab::Posts,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Events => "events",
            Tab::News => "news",
            Tab::Schemes => "schemes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub community_id: String,
    pub joined: bool,
    pub notifications: bool,
    pub tab: Tab,
}

impl State {
    pub fn seeded(directory: &dyn DirectoryProvider, community_id: &str) -> Self {
        Self {
            community_id: community_id.to_string(),
            joined: directory.joined_by_default().iter().any(|id| id == community_id),
            notifications: true,
            tab: Tab::Posts,
        }
    }
}

fn render_event(event: &CommunityEvent) -> String {
    format!(
        r#"<article class="card event"><h3>{}</h3><p class="muted">📅 {} · 📍 {}</p><p>{}</p><p class="muted">👥 {} attending</p></article>"#,
        esc(&event.title),
        esc(&event.date),
        esc(&event.location),
        esc(&event.description),
        format_count(event.attendees)
    )
}

fn render_scheme(scheme: &Scheme) -> String {
    format!(
        r#"<article class="card scheme"><h3>{}</h3><span class="badge badge-green">{}</span><p>{}</p><p class="muted">Deadline: {}</p></article>"#,
        esc(&scheme.title),
        esc(&scheme.status),
        esc(&scheme.description),
        esc(&scheme.deadline)
    )
}

fn render_tab(community: &CommunityProfile, tab: Tab) -> String {
    let news: Vec<&Post> = community
        .posts
        .iter()
        .filter(|p| p.category == Category::News)
        .collect();
    match tab {
        Tab::Posts if community.posts.is_empty() => {
            empty_state("📭", "No posts yet", "Nothing has been shared here yet")
        }
        Tab::Posts => post_card::render_list(&community.posts),
        Tab::Events if community.events.is_empty() => {
            empty_state("📅", "No upcoming events", "Check back later")
        }
        Tab::Events => community.events.iter().map(render_event).collect(),
        Tab::News if news.is_empty() => {
            empty_state("📰", "No news updates", "Community news will appear here")
        }
        Tab::News => post_card::render_list(news),
        Tab::Schemes if community.schemes.is_empty() => {
            empty_state("🎁", "No schemes", "Check back later")
        }
        Tab::Schemes => community.schemes.iter().map(render_scheme).collect(),
    }
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let Some(community) = store.directory().community(&state.community_id) else {
        let body = empty_state(
            "🏘️",
            "Community not found",
            "This community doesn't exist or has been removed",
        );
        return Page::new("Community not found", body);
    };
    let listing = &community.listing;
    let body = format!(
        r#"<header class="card community-header">
<a href="/communities">← Back</a>
{avatar}
<h1>{name}</h1>
<p class="muted">📍 {location} · 👥 {members} members</p>
<p>{description}</p>
<p class="muted">{category} · Established {established}</p>
<div class="actions">
<button data-action="toggle-join-detail">{join}</button>
<button data-action="toggle-community-notifications" aria-pressed="{notify}">{bell}</button>
<button data-action="share-community">Share</button>
</div>
</header>
{tabs}
<section class="tab-panel">{panel}</section>"#,
        avatar = avatar_html(&listing.avatar, &listing.name, "lg"),
        name = esc(&listing.name),
        location = esc(&listing.location),
        members = format_count(listing.members),
        description = esc(&listing.description),
        category = esc(&listing.category),
        established = esc(&community.established),
        join = if state.joined { "Joined" } else { "Join Community" },
        notify = state.notifications,
        bell = if state.notifications { "🔔" } else { "🔕" },
        tabs = tab_bar("community-tab", &Tab::ALL, state.tab.id()),
        panel = render_tab(&community, state.tab),
    );
    Page::new(listing.name.clone(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::MemoryStore;
    use crate::directory::MockDirectory;
    use crate::store::UserStore;
    use std::sync::Arc;

    fn store() -> UserStore<MemoryStore> {
        UserStore::open(MemoryStore::new(), Arc::new(MockDirectory::new()))
    }

    #[test]
    fn seeded_membership_follows_directory() {
        let dir = MockDirectory::new();
        assert!(State::seeded(&dir, "1").joined);
        assert!(!State::seeded(&dir, "2").joined);
        assert!(State::seeded(&dir, "2").notifications);
    }

    #[test]
    fn tabs_switch_panels() {
        let store = store();
        let mut state = State::seeded(store.directory(), "2");
        let page = render(&store, &state);
        assert_eq!(page.title, "Thanjavur Central");
        assert!(page.body.contains("Local Market Update"));

        state.tab = Tab::from_id("schemes");
        assert!(render(&store, &state).body.contains("Street Light Maintenance"));
        assert!(page.body.contains("Established 2023"));
    }

    #[test]
    fn news_tab_lists_news_posts_only() {
        let store = store();
        let mut state = State::seeded(store.directory(), "2");
        state.tab = Tab::from_id("news");
        let body = render(&store, &state).body;
        assert!(body.contains("Local Market Update"));
        assert!(!body.contains("Clean-up Drive"));
        assert!(body.contains(r#"class="tab active" data-action="community-tab" data-tab="news""#));
    }

    #[test]
    fn news_tab_without_news_shows_empty_state() {
        let mut community = MockDirectory::new().community("2").unwrap();
        community.posts.retain(|p| p.category != Category::News);
        let panel = render_tab(&community, Tab::News);
        assert!(panel.contains("No news updates"));
        assert!(panel.contains("Community news will appear here"));
    }

    #[test]
    fn unknown_community() {
        let store = store();
        let state = State::seeded(store.directory(), "99");
        assert_eq!(render(&store, &state).title, "Community not found");
    }
}
