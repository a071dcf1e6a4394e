use crate::core::helpers::format_count;
use crate::follow::placeholder_entry;
use crate::models::models::{PersonProfile, UserStats};
use crate::store::StoreView;
use crate::views::{attr, avatar_html, empty_state, esc, post_card, tab_bar, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Posts,
    Communities,
    About,
}

impl Tab {
    const ALL: [(&'static str, &'static str); 3] =
        [("posts", "Posts"), ("communities", "Communities"), ("about", "About")];

    pub fn from_id(id: &str) -> Tab {
        match id {
            "communities" => Tab::Communities,
            "about" => Tab::About,
            _ => Tab::Posts,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Communities => "communities",
            Tab::About => "about",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub user_id: String,
    pub tab: Tab,
}

impl State {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            tab: Tab::Posts,
        }
    }
}

/// Directory record for `id`, or an empty placeholder profile.
pub fn person_or_placeholder(store: &dyn StoreView, id: &str) -> PersonProfile {
    store.directory().person(id).unwrap_or_else(|| PersonProfile {
        entry: placeholder_entry(id),
        bio: String::new(),
        joined_date: String::new(),
        stats: UserStats::default(),
        posts: Vec::new(),
    })
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let person = person_or_placeholder(store, &state.user_id);
    let entry = &person.entry;
    let is_self = store.user().map(|u| u.id == entry.id).unwrap_or(false);
    let follow_button = if is_self {
        String::new()
    } else if store.is_following(&entry.id) {
        format!(
            r#"<button data-action="unfollow" data-user="{}">Following</button>"#,
            attr(&entry.id)
        )
    } else {
        format!(
            r#"<button data-action="follow" data-user="{}">Follow</button>"#,
            attr(&entry.id)
        )
    };
    let panel = match state.tab {
        Tab::Posts if person.posts.is_empty() => {
            empty_state("📝", "No posts yet", "Nothing shared yet")
        }
        Tab::Posts => post_card::render_list(&person.posts),
        Tab::Communities => format!(
            r#"<section class="card"><p>Member of {} communities</p></section>"#,
            format_count(person.stats.communities)
        ),
        Tab::About => format!(
            r#"<section class="card"><h3>About</h3><p>{}</p><p class="muted">📍 {}</p><p class="muted">{}</p></section>"#,
            esc(&person.bio),
            esc(&entry.location),
            esc(&person.joined_date)
        ),
    };
    let body = format!(
        r#"<header class="card profile-header">
<a href="/">← Back</a>
{avatar}
<h1>{name}</h1>
<p class="muted">📍 {location}</p>
<div class="stats"><div><strong>{posts}</strong> Posts</div><div><strong>{followers}</strong> Followers</div><div><strong>{following}</strong> Following</div></div>
{follow}
</header>
{tabs}
<section class="tab-panel">{panel}</section>"#,
        avatar = avatar_html(&entry.avatar, &entry.name, "xl"),
        name = esc(&entry.name),
        location = esc(&entry.location),
        posts = format_count(person.stats.posts),
        followers = format_count(person.stats.followers),
        following = format_count(person.stats.following),
        follow = follow_button,
        tabs = tab_bar("user-profile-tab", &Tab::ALL, state.tab.id()),
        panel = panel,
    );
    Page::new(entry.name.clone(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::MemoryStore;
    use crate::directory::MockDirectory;
    use crate::store::UserStore;
    use crate::users::{new_member, NewMember};
    use std::sync::Arc;

    fn signed_in() -> UserStore<MemoryStore> {
        let mut store = UserStore::open(MemoryStore::new(), Arc::new(MockDirectory::new()));
        store
            .login(new_member(&NewMember {
                name: "Anjali Rao".into(),
                email: "anjali@example.in".into(),
                location: "Chennai".into(),
            }))
            .unwrap();
        store
    }

    #[test]
    fn follow_button_reflects_store() {
        let mut store = signed_in();
        let state = State::new("priya-sharma");
        assert!(render(&store, &state).body.contains(r#"data-action="follow""#));
        store.follow_user("priya-sharma").unwrap();
        assert!(render(&store, &state).body.contains(r#"data-action="unfollow""#));
    }

    #[test]
    fn unknown_person_gets_placeholder() {
        let store = signed_in();
        let page = render(&store, &State::new("u42"));
        assert_eq!(page.title, "User u42");
        assert!(page.body.contains("Unknown"));
    }

    #[test]
    fn own_profile_has_no_follow_button() {
        let store = signed_in();
        let id = store.user().unwrap().id.clone();
        let body = render(&store, &State::new(&id)).body;
        assert!(!body.contains(r#"data-action="follow""#));
    }
}
