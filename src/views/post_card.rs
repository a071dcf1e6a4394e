use crate::core::helpers::format_count;
use crate::models::models::Post;
use crate::posts::render_content;
use crate::routes::Route;
use crate::views::{attr, avatar_html, esc};

pub fn render(post: &Post) -> String {
    let (author_name, author_avatar, author_link, official) = match &post.author {
        Some(author) => (
            author.name.as_str(),
            author.avatar.as_str(),
            Some(Route::UserProfile(author.id.clone()).path()),
            author.is_official,
        ),
        None => ("Community Member", "", None, false),
    };
    let name_html = match author_link {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, attr(&href), esc(author_name)),
        None => esc(author_name),
    };
    let official_badge = if official {
        r#" <span class="badge badge-blue">✓ Official</span>"#
    } else {
        ""
    };
    let location = post
        .location
        .as_deref()
        .map(|l| format!(" · 📍 {}", esc(l)))
        .unwrap_or_default();
    let title = if post.title.is_empty() {
        String::new()
    } else {
        format!("<h4>{}</h4>", esc(&post.title))
    };
    let mut media = String::new();
    if let Some(image) = &post.image {
        media.push_str(&format!(
            r#"<img class="post-media" src="{}" alt="Post content">"#,
            attr(image)
        ));
    }
    if let Some(video) = &post.video {
        media.push_str(&format!(
            r#"<video class="post-media" src="{}" controls></video>"#,
            attr(video)
        ));
    }
    let category = post.category;

    format!(
        r#"<article class="card post" data-post="{id}">
<header>{avatar}<div><div>{name}{official}</div><div class="muted">🕒 {time}{location}</div></div>
<span class="badge {badge}">{icon} {category}</span></header>
{title}<p>{content}</p>{media}
<footer>
<button data-action="like" data-post="{id}" aria-pressed="{liked}">{heart} {likes}</button>
<button data-action="comments" data-post="{id}">💬 {comments}</button>
<button data-action="share" data-post="{id}">↗ {shares}</button>
</footer>
</article>"#,
        id = post.id,
        avatar = avatar_html(author_avatar, author_name, "sm"),
        name = name_html,
        official = official_badge,
        time = esc(&post.time),
        location = location,
        badge = category.badge_class(),
        icon = category.icon(),
        category = category.label(),
        title = title,
        content = render_content(&post.content),
        media = media,
        liked = post.is_liked,
        heart = if post.is_liked { "❤️" } else { "🤍" },
        likes = format_count(post.likes),
        comments = format_count(post.comments),
        shares = format_count(post.shares),
    )
}

pub fn render_list<'a>(posts: impl IntoIterator<Item = &'a Post>) -> String {
    posts.into_iter().map(render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::sample_feed;
    use crate::models::models::Category;

    #[test]
    fn official_author_gets_badge_and_emoji_avatar() {
        let feed = sample_feed();
        let html = render(&feed[2]);
        assert!(html.contains("✓ Official"));
        assert!(html.contains("🏛️"));
        assert!(html.contains(r#"href="/profile/tn-govt""#));
    }

    #[test]
    fn unknown_category_uses_default_bucket() {
        let mut post = sample_feed().remove(0);
        post.category = Category::General;
        post.author = None;
        let html = render(&post);
        assert!(html.contains("badge-gray"));
        assert!(html.contains("📝 General"));
        assert!(html.contains("Community Member"));
    }

    #[test]
    fn liked_state_and_counts_show() {
        let feed = sample_feed();
        let html = render(&feed[1]);
        assert!(html.contains(r#"aria-pressed="true""#));
        assert!(html.contains("❤️ 47"));
    }
}
