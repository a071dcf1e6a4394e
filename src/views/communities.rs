use crate::core::helpers::format_count;
use crate::directory::DirectoryProvider;
use crate::models::models::CommunityListing;
use crate::routes::Route;
use crate::search::filter_communities;
use crate::store::StoreView;
use crate::views::{attr, avatar_html, empty_state, esc, Page};

/// Directory screen state. Membership here is a local toggle seeded from
/// the directory; nothing about it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub query: String,
    pub joined: Vec<String>,
}

impl State {
    pub fn seeded(directory: &dyn DirectoryProvider) -> Self {
        Self {
            query: String::new(),
            joined: directory.joined_by_default(),
        }
    }

    pub fn is_joined(&self, id: &str) -> bool {
        self.joined.iter().any(|j| j == id)
    }

    /// Flips membership and returns whether the community is now joined.
    pub fn toggle_join(&mut self, id: &str) -> bool {
        if self.is_joined(id) {
            self.joined.retain(|j| j != id);
            false
        } else {
            self.joined.push(id.to_string());
            true
        }
    }
}

fn render_listing(listing: &CommunityListing, joined: bool) -> String {
    format!(
        r#"<article class="card community">
<a href="{href}">{avatar}<h3>{name}</h3></a>
<p class="muted">📍 {location} · 👥 {members} members</p>
<p>{description}</p>
<p class="muted">{activity}</p>
<button data-action="toggle-join" data-community="{id}">{label}</button>
</article>"#,
        href = attr(&Route::CommunityDetail(listing.id.clone()).path()),
        avatar = avatar_html(&listing.avatar, &listing.name, "md"),
        name = esc(&listing.name),
        location = esc(&listing.location),
        members = format_count(listing.members),
        description = esc(&listing.description),
        activity = esc(&listing.recent_activity),
        id = attr(&listing.id),
        label = if joined { "Leave" } else { "Join" },
    )
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let all = store.directory().communities();
    let matching = filter_communities(&all, &state.query);
    let (mine, others): (Vec<&CommunityListing>, Vec<&CommunityListing>) =
        matching.iter().copied().partition(|c| state.is_joined(&c.id));

    let mut sections = String::new();
    if !mine.is_empty() {
        sections.push_str("<h2>My Communities</h2>");
        sections.extend(mine.iter().map(|c| render_listing(c, true)));
    }
    if !others.is_empty() {
        sections.push_str("<h2>Discover More</h2>");
        sections.extend(others.iter().map(|c| render_listing(c, false)));
    }
    if matching.is_empty() {
        sections = empty_state("🔍", "No communities found", "Try searching with different keywords");
    }

    let body = format!(
        r#"<header class="page-header"><h1>Communities</h1><p class="muted">Discover and join local communities</p></header>
<form data-action="search-communities"><input name="q" placeholder="Search communities..." value="{}"></form>
{}"#,
        attr(&state.query),
        sections
    );
    Page::new("Communities", body)
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
    fn joined_and_discover_sections() {
        let store = store();
        let state = State::seeded(store.directory());
        let body = render(&store, &state).body;
        let mine = body.find("My Communities").unwrap();
        let discover = body.find("Discover More").unwrap();
        let anna = body.find("Anna Nagar Community").unwrap();
        let salem = body.find("Salem Green Initiative").unwrap();
        assert!(mine < anna && anna < discover && discover < salem);
    }

    #[test]
    fn toggle_join_flips_membership() {
        let mut state = State::seeded(&MockDirectory::new());
        assert!(!state.toggle_join("1"));
        assert!(state.toggle_join("1"));
        assert!(state.toggle_join("5"));
        assert!(state.is_joined("5"));
    }

    #[test]
    fn search_without_matches_shows_empty_state() {
        let store = store();
        let state = State { query: "zzz".into(), ..State::seeded(store.directory()) };
        assert!(render(&store, &state).body.contains("No communities found"));
    }
}
