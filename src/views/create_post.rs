use crate::core::helpers::is_blank;
use crate::models::models::{Category, PostDraft};
use crate::views::{attr, esc, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub kind: MediaKind,
    /// Data URI or URL the preview loads from.
    pub url: String,
}

impl MediaAttachment {
    /// `image/*` MIME types become images, anything else is treated as video.
    pub fn from_mime(mime: &str, url: impl Into<String>) -> Self {
        let kind = if mime.trim().to_ascii_lowercase().starts_with("image/") {
            MediaKind::Image
        } else {
            MediaKind::Video
        };
        Self { kind, url: url.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub location: String,
    pub media: Option<MediaAttachment>,
}

impl State {
    /// Submit stays disabled until title, description and category are present.
    pub fn can_submit(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.description) && self.category.is_some()
    }

    pub fn to_draft(&self) -> PostDraft {
        let (image, video) = match &self.media {
            Some(MediaAttachment { kind: MediaKind::Image, url }) => (Some(url.clone()), None),
            Some(MediaAttachment { kind: MediaKind::Video, url }) => (None, Some(url.clone())),
            None => (None, None),
        };
        PostDraft {
            title: self.title.clone(),
            content: self.description.clone(),
            category: self.category,
            location: Some(self.location.clone()).filter(|l| !is_blank(l)),
            image,
            video,
            ..PostDraft::default()
        }
    }

    pub fn reset(&mut self) {
        *self = State::default();
    }
}

fn category_options(selected: Option<Category>) -> String {
    Category::SELECTABLE
        .iter()
        .map(|c| {
            format!(
                r#"<button type="button" class="chip{}" data-action="post-category" data-category="{}">{} {}</button>"#,
                if Some(*c) == selected { " active" } else { "" },
                c.id(),
                c.icon(),
                c.label()
            )
        })
        .collect()
}

fn media_preview(media: Option<&MediaAttachment>) -> String {
    match media {
        Some(MediaAttachment { kind: MediaKind::Image, url }) => format!(
            r#"<div class="media-preview"><img src="{}" alt="Selected image"><button type="button" data-action="remove-media">Remove</button></div>"#,
            attr(url)
        ),
        Some(MediaAttachment { kind: MediaKind::Video, url }) => format!(
            r#"<div class="media-preview"><video src="{}" controls></video><button type="button" data-action="remove-media">Remove</button></div>"#,
            attr(url)
        ),
        None => r#"<label class="media-upload">📷 Add photo or video<input type="file" accept="image/*,video/*" data-action="attach-media"></label>"#.to_string(),
    }
}

pub fn render(state: &State) -> Page {
    let body = format!(
        r#"<section class="card">
<h1>Create Post</h1>
<p class="muted">Share something with your community</p>
<form data-action="submit-post">
<label>Title<input name="title" value="{title}" required></label>
<label>Description<textarea name="description" required>{description}</textarea></label>
<div class="chips">{categories}</div>
<label>Location (optional)<input name="location" value="{location}"></label>
{media}
<button type="submit"{disabled}>Share Post</button>
</form>
</section>"#,
        title = attr(&state.title),
        description = esc(&state.description),
        categories = category_options(state.category),
        location = attr(&state.location),
        media = media_preview(state.media.as_ref()),
        disabled = if state.can_submit() { "" } else { " disabled" },
    );
    Page::new("Create Post", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        State {
            title: "Hi".into(),
            description: "Hello".into(),
            category: Some(Category::News),
            ..State::default()
        }
    }

    #[test]
    fn submit_needs_required_fields() {
        assert!(!State::default().can_submit());
        assert!(filled().can_submit());
        assert!(!State { category: None, ..filled() }.can_submit());
        assert!(render(&State::default()).body.contains("type=\"submit\" disabled"));
    }

    #[test]
    fn mime_prefix_decides_media_kind() {
        assert_eq!(MediaAttachment::from_mime("image/png", "data:x").kind, MediaKind::Image);
        assert_eq!(MediaAttachment::from_mime("video/mp4", "data:x").kind, MediaKind::Video);
    }

    #[test]
    fn draft_carries_media_and_optional_location() {
        let state = State {
            media: Some(MediaAttachment::from_mime("video/mp4", "blob:clip")),
            location: "  ".into(),
            ..filled()
        };
        let draft = state.to_draft();
        assert_eq!(draft.video.as_deref(), Some("blob:clip"));
        assert_eq!(draft.image, None);
        assert_eq!(draft.location, None);
        assert_eq!(draft.likes, 0);
    }

    #[test]
    fn reset_clears_form() {
        let mut state = filled();
        state.reset();
        assert_eq!(state, State::default());
    }
}
