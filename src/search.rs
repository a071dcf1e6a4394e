//! Case-insensitive substring filters over directory data. An empty query
//! matches everything.

use crate::models::models::{CommunityListing, ResultKind, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    #[default]
    All,
    Posts,
    Events,
    Schemes,
    Alerts,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 5] = [
        SearchFilter::All,
        SearchFilter::Posts,
        SearchFilter::Events,
        SearchFilter::Schemes,
        SearchFilter::Alerts,
    ];

    pub fn from_id(id: &str) -> SearchFilter {
        match id.trim().to_ascii_lowercase().as_str() {
            "posts" => SearchFilter::Posts,
            "events" => SearchFilter::Events,
            "schemes" => SearchFilter::Schemes,
            "alerts" => SearchFilter::Alerts,
            _ => SearchFilter::All,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            SearchFilter::All => "all",
            SearchFilter::Posts => "posts",
            SearchFilter::Events => "events",
            SearchFilter::Schemes => "schemes",
            SearchFilter::Alerts => "alerts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchFilter::All => "All",
            SearchFilter::Posts => "Posts",
            SearchFilter::Events => "Events",
            SearchFilter::Schemes => "Schemes",
            SearchFilter::Alerts => "Alerts",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SearchFilter::All => "📱",
            SearchFilter::Posts => "📝",
            SearchFilter::Events => "🎉",
            SearchFilter::Schemes => "🎁",
            SearchFilter::Alerts => "🔌",
        }
    }

    pub fn matches(self, kind: ResultKind) -> bool {
        match self {
            SearchFilter::All => true,
            SearchFilter::Posts => kind == ResultKind::Post,
            SearchFilter::Events => kind == ResultKind::Event,
            SearchFilter::Schemes => kind == ResultKind::Scheme,
            SearchFilter::Alerts => kind == ResultKind::Alert,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Results whose title or content contains `query` and whose kind passes `filter`.
pub fn filter_results<'a>(
    results: &'a [SearchResult],
    query: &str,
    filter: SearchFilter,
) -> Vec<&'a SearchResult> {
    let needle = query.trim().to_lowercase();
    results
        .iter()
        .filter(|r| filter.matches(r.kind))
        .filter(|r| contains_ci(&r.title, &needle) || contains_ci(&r.content, &needle))
        .collect()
}

/// Communities whose name, location or description contains `query`.
pub fn filter_communities<'a>(
    communities: &'a [CommunityListing],
    query: &str,
) -> Vec<&'a CommunityListing> {
    let needle = query.trim().to_lowercase();
    communities
        .iter()
        .filter(|c| {
            contains_ci(&c.name, &needle)
                || contains_ci(&c.location, &needle)
                || contains_ci(&c.description, &needle)
        })
        .collect()
}
