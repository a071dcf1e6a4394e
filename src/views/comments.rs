use crate::config::JUST_NOW;
use crate::core::helpers::sanitize_text;
use crate::models::models::Comment;
use crate::store::StoreView;
use crate::views::{attr, avatar_html, esc};

/// Comments modal for one post. Comments added here live only as long as
/// the modal; the post's comment counter is what the store keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub post_id: u64,
    pub draft: String,
    pub added: Vec<Comment>,
}

impl State {
    pub fn new(post_id: u64) -> Self {
        Self {
            post_id,
            draft: String::new(),
            added: Vec::new(),
        }
    }

    /// Appends `text` as the viewer's comment. Blank text is ignored.
    pub fn add(&mut self, text: &str, author: &str, avatar: &str, existing: usize) -> Option<&Comment> {
        let content = sanitize_text(text);
        if content.is_empty() {
            return None;
        }
        let id = (existing + self.added.len() + 1) as u32;
        self.added.push(Comment {
            id,
            author: author.to_string(),
            avatar: avatar.to_string(),
            content,
            timestamp: JUST_NOW.to_string(),
        });
        self.draft.clear();
        self.added.last()
    }
}

fn render_comment(comment: &Comment) -> String {
    format!(
        r#"<li class="comment">{}<div><strong>{}</strong><p>{}</p><span class="muted">{}</span></div></li>"#,
        avatar_html(&comment.avatar, &comment.author, "xs"),
        esc(&comment.author),
        esc(&comment.content),
        esc(&comment.timestamp)
    )
}

pub fn render(store: &dyn StoreView, state: &State) -> String {
    let mut comments = store.directory().comments(state.post_id);
    comments.extend(state.added.iter().cloned());
    let items: String = comments.iter().map(render_comment).collect();
    format!(
        r#"<div class="modal" role="dialog" aria-label="Comments"><div class="card">
<header><h3>Comments</h3><button data-action="close-modal" aria-label="Close">✕</button></header>
<ul class="comments">{items}</ul>
<form data-action="add-comment" data-post="{id}">
<input name="comment" placeholder="Add a comment..." value="{draft}">
<button type="submit"{disabled}>Send</button>
</form>
</div></div>"#,
        items = items,
        id = state.post_id,
        draft = attr(&state.draft),
        disabled = if state.draft.trim().is_empty() { " disabled" } else { "" },
    )
}
