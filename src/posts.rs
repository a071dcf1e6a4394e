use std::sync::OnceLock;

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::avatar::avatar_or_generated;
use crate::config::*;
use crate::core::errors::{HubError, HubResult};
use crate::core::helpers::{is_blank, now_iso, sanitize_text};
use crate::models::models::{Author, Category, Post, PostDraft, User};

/// Required-field checks the create-post form runs before handing a draft to the store.
pub fn validate_draft(draft: &PostDraft) -> HubResult<()> {
    if is_blank(&draft.title) {
        return Err(HubError::validation("Title is required"));
    }
    if is_blank(&draft.content) {
        return Err(HubError::validation("Description is required"));
    }
    if draft.category.is_none() {
        return Err(HubError::validation("Please select a category"));
    }
    if draft.title.chars().count() > MAX_POST_TITLE_LENGTH {
        return Err(HubError::validation("Title is too long"));
    }
    if draft.content.chars().count() > MAX_POST_LENGTH {
        return Err(HubError::validation("Description is too long"));
    }
    Ok(())
}

pub fn author_of(user: &User) -> Author {
    Author {
        id: user.id.clone(),
        name: user.name.clone(),
        avatar: avatar_or_generated(&user.avatar, &user.name),
        is_official: false,
    }
}

/// A fresh post from a draft. Engagement starts from the draft's likes and
/// comments; shares and the liked flag always start cleared.
pub fn build_post(draft: &PostDraft, id: u64, author: Author) -> Post {
    Post {
        id,
        author: Some(author),
        title: sanitize_text(&draft.title),
        content: sanitize_text(&draft.content),
        category: draft.category.unwrap_or(Category::General),
        likes: draft.likes,
        comments: draft.comments,
        shares: 0,
        is_liked: false,
        time: JUST_NOW.to_string(),
        created_at: Some(now_iso()),
        location: draft
            .location
            .as_deref()
            .map(sanitize_text)
            .filter(|l| !l.is_empty()),
        image: draft.image.clone().filter(|i| !is_blank(i)),
        video: draft.video.clone().filter(|v| !is_blank(v)),
    }
}

/// Flip the liked flag and move the counter with it. Returns the new flag.
pub fn toggle_like(post: &mut Post) -> bool {
    if post.is_liked {
        post.likes = post.likes.saturating_sub(1);
    } else {
        post.likes = post.likes.saturating_add(1);
    }
    post.is_liked = !post.is_liked;
    post.is_liked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_id(id: &str) -> CategoryFilter {
        if id.trim().eq_ignore_ascii_case("all") || is_blank(id) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from_id(id))
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.id(),
        }
    }

    pub fn matches(self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => post.category == c,
        }
    }
}

pub fn filter_by_category(posts: &[Post], filter: CategoryFilter) -> Vec<&Post> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

fn url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"https?://[^\s]+").expect("Regex should compile"))
}

/// Escaped post text with http(s) URLs turned into links.
pub fn render_content(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for m in url_regex().find_iter(content) {
        out.push_str(&encode_text(&content[last..m.start()]));
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            encode_double_quoted_attribute(m.as_str()),
            encode_text(m.as_str())
        ));
        last = m.end();
    }
    out.push_str(&encode_text(&content[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Hi".to_string(),
            content: "Hello".to_string(),
            category: Some(Category::News),
            ..Default::default()
        }
    }

    fn author() -> Author {
        Author {
            id: "u1".into(),
            name: "Anjali Rao".into(),
            avatar: String::new(),
            is_official: false,
        }
    }

    #[test]
    fn draft_validation() {
        assert!(validate_draft(&draft()).is_ok());
        let no_title = PostDraft { title: "  ".into(), ..draft() };
        assert!(validate_draft(&no_title).is_err());
        let no_category = PostDraft { category: None, ..draft() };
        assert!(validate_draft(&no_category).is_err());
    }

    #[test]
    fn built_post_is_just_now_and_unliked() {
        let d = PostDraft { shares: 9, location: Some("  ".into()), ..draft() };
        let post = build_post(&d, 42, author());
        assert_eq!(post.id, 42);
        assert_eq!(post.time, JUST_NOW);
        assert_eq!(post.shares, 0);
        assert!(!post.is_liked);
        assert_eq!(post.location, None);
        assert_eq!(post.category, Category::News);
    }

    #[test]
    fn like_then_unlike_restores_count() {
        let mut post = build_post(&PostDraft { likes: 5, ..draft() }, 1, author());
        assert!(toggle_like(&mut post));
        assert_eq!(post.likes, 6);
        assert!(!toggle_like(&mut post));
        assert_eq!(post.likes, 5);
    }

    #[test]
    fn unlike_never_goes_negative() {
        let mut post = build_post(&draft(), 1, author());
        post.is_liked = true;
        post.likes = 0;
        toggle_like(&mut post);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn category_filter() {
        let mut posts = vec![build_post(&draft(), 1, author())];
        posts.push(build_post(&PostDraft { category: Some(Category::Alert), ..draft() }, 2, author()));
        assert_eq!(filter_by_category(&posts, CategoryFilter::All).len(), 2);
        let alerts = filter_by_category(&posts, CategoryFilter::from_id("alert"));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, 2);
    }

    #[test]
    fn content_is_escaped_and_linkified() {
        let html = render_content("<b>see</b> https://tneb.in/outage?a=1&b=2 now");
        assert!(html.starts_with("&lt;b&gt;see&lt;/b&gt;"));
        assert!(html.contains(r#"<a href="https://tneb.in/outage?a=1&amp;b=2""#));
        assert!(html.ends_with("</a> now"));
    }
}
