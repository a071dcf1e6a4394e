use crate::models::models::Category;
use crate::posts::{filter_by_category, CategoryFilter};
use crate::store::StoreView;
use crate::views::{empty_state, esc, post_card, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub filter: CategoryFilter,
}

fn filter_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All",
        CategoryFilter::Only(Category::Alert) => "Alerts",
        CategoryFilter::Only(Category::Event) => "Events",
        CategoryFilter::Only(Category::Scheme) => "Schemes",
        CategoryFilter::Only(Category::Weather) => "Weather",
        CategoryFilter::Only(Category::News) => "News",
        CategoryFilter::Only(Category::General) => "General",
    }
}

fn filter_chips(active: CategoryFilter) -> String {
    let filters = std::iter::once(CategoryFilter::All)
        .chain(Category::SELECTABLE.into_iter().map(CategoryFilter::Only));
    let chips: String = filters
        .map(|f| {
            let icon = match f {
                CategoryFilter::All => "📱",
                CategoryFilter::Only(c) => c.icon(),
            };
            format!(
                r#"<button class="chip{}" data-action="select-category" data-category="{}">{} {}</button>"#,
                if f == active { " active" } else { "" },
                f.id(),
                icon,
                filter_label(f)
            )
        })
        .collect();
    format!(r#"<div class="chips">{}</div>"#, chips)
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let greeting = match store.user() {
        Some(user) => {
            let first = user.name.split_whitespace().next().unwrap_or_default();
            format!("Hello, {}! 👋", esc(first))
        }
        None => "Hello! 👋".to_string(),
    };
    let directory = store.directory();
    let communities = match store.user() {
        Some(user) if !user.communities.is_empty() => user.communities.len(),
        _ => directory.joined_by_default().len(),
    };
    let alerts = directory.notifications().iter().filter(|n| n.unread).count();

    let posts = filter_by_category(store.feed(), state.filter);
    let feed = if posts.is_empty() {
        empty_state(
            "📭",
            "No posts yet",
            "Be the first to share something with your community!",
        )
    } else {
        post_card::render_list(posts)
    };

    let body = format!(
        r#"<header class="page-header">
<h1>{greeting}</h1>
<p class="muted">What's happening in your community</p>
<button data-action="refresh" aria-label="Refresh">🔄</button>
<a href="/search" aria-label="Search">🔍</a>
</header>
{chips}
<div class="quick-stats">
<div class="card"><div>🏘️</div><strong>{communities}</strong><div class="muted">Communities</div></div>
<div class="card"><div>🔔</div><strong>{alerts}</strong><div class="muted">New Alerts</div></div>
</div>
<section class="feed">{feed}</section>"#,
        greeting = greeting,
        chips = filter_chips(state.filter),
        communities = communities,
        alerts = alerts,
        feed = feed,
    );
    Page::new("Home", body)
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
    fn shows_whole_feed_by_default() {
        let page = render(&store(), &State::default());
        assert_eq!(page.body.matches("<article").count(), 4);
        assert!(page.body.contains(r#"class="chip active" data-action="select-category" data-category="all""#));
    }

    #[test]
    fn category_filter_narrows_feed() {
        let state = State { filter: CategoryFilter::Only(Category::Weather) };
        let page = render(&store(), &state);
        assert_eq!(page.body.matches("<article").count(), 1);
        assert!(page.body.contains("Heavy Rain Expected"));
    }

    #[test]
    fn empty_category_shows_empty_state() {
        let state = State { filter: CategoryFilter::Only(Category::News) };
        assert!(render(&store(), &state).body.contains("No posts yet"));
    }
}
