use crate::core::helpers::initials;
use crate::models::models::SearchResult;
use crate::search::{filter_results, SearchFilter};
use crate::store::StoreView;
use crate::views::{attr, empty_state, esc, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub query: String,
    pub filter: SearchFilter,
}

impl State {
    pub fn with_query(query: Option<String>) -> Self {
        Self {
            query: query.unwrap_or_default(),
            filter: SearchFilter::All,
        }
    }
}

fn render_result(r: &SearchResult) -> String {
    format!(
        r#"<article class="card result">
<header><span class="avatar xs">{initials}</span><div><h3>{title}</h3><span class="muted">{author}</span></div>
<span class="badge {badge}">{icon} {category}</span></header>
<p>{content}</p>
<footer class="muted">📍 {location} · 🕒 {time} · ❤️ {likes} · 💬 {comments}</footer>
</article>"#,
        initials = esc(&initials(&r.author, usize::MAX)),
        title = esc(&r.title),
        author = esc(&r.author),
        badge = r.category.badge_class(),
        icon = r.category.icon(),
        category = r.category.id(),
        content = esc(&r.content),
        location = esc(&r.location),
        time = esc(&r.time),
        likes = r.likes,
        comments = r.comments,
    )
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let corpus = store.directory().search_corpus();
    let hits = filter_results(&corpus, &state.query, state.filter);
    let results = if !hits.is_empty() {
        hits.iter().map(|r| render_result(r)).collect()
    } else if state.query.trim().is_empty() {
        empty_state(
            "🔍",
            "Start searching",
            "Search for users, locations, communities and more",
        )
    } else {
        empty_state("🔍", "No results found", "Try different keywords or filters")
    };
    let chips: String = SearchFilter::ALL
        .iter()
        .map(|f| {
            format!(
                r#"<button class="chip{}" data-action="search-filter" data-filter="{}">{} {}</button>"#,
                if *f == state.filter { " active" } else { "" },
                f.id(),
                f.icon(),
                f.label()
            )
        })
        .collect();
    let body = format!(
        r#"<header class="page-header"><h1>Search</h1></header>
<form data-action="search"><input name="q" placeholder="Search posts, events, people..." value="{}"></form>
<div class="chips">{}</div>
<section class="results">{}</section>"#,
        attr(&state.query),
        chips,
        results
    );
    Page::new("Search", body)
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
    fn no_matches_says_so() {
        let state = State { query: "zzz".into(), ..State::default() };
        assert!(render(&store(), &state).body.contains("No results found"));
    }

    #[test]
    fn query_and_filter_combine() {
        let state = State { query: "power".into(), filter: SearchFilter::Alerts };
        let body = render(&store(), &state).body;
        assert!(body.contains("Power Cut Alert"));
        assert_eq!(body.matches("<article").count(), 1);
        assert!(body.contains(r#"class="chip active" data-action="search-filter" data-filter="alerts""#));
    }

    #[test]
    fn empty_query_lists_everything() {
        let body = render(&store(), &State::with_query(None)).body;
        assert_eq!(body.matches("<article").count(), 4);
    }
}
