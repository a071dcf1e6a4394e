use urlencoding::encode;

use crate::config::SHARE_PREVIEW_LENGTH;
use crate::core::helpers::truncate_chars;
use crate::views::esc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    CopyLink,
    WhatsApp,
    Email,
    Sms,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::CopyLink,
        ShareTarget::WhatsApp,
        ShareTarget::Email,
        ShareTarget::Sms,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ShareTarget::CopyLink => "copy",
            ShareTarget::WhatsApp => "whatsapp",
            ShareTarget::Email => "email",
            ShareTarget::Sms => "sms",
        }
    }

    pub fn from_id(id: &str) -> Option<ShareTarget> {
        ShareTarget::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::CopyLink => "Copy Link",
            ShareTarget::WhatsApp => "Share via WhatsApp",
            ShareTarget::Email => "Share via Email",
            ShareTarget::Sms => "Share via SMS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub post_id: u64,
}

pub fn post_url(origin: &str, post_id: u64) -> String {
    format!("{}/post/{}", origin.trim_end_matches('/'), post_id)
}

/// The link handed to the platform for `target`: the bare post URL for
/// copying, otherwise a `wa.me`, `mailto:` or `sms:` URI.
pub fn share_link(target: ShareTarget, origin: &str, post_id: u64, content: &str) -> String {
    let url = post_url(origin, post_id);
    match target {
        ShareTarget::CopyLink => url,
        ShareTarget::WhatsApp => {
            let preview = truncate_chars(content, SHARE_PREVIEW_LENGTH);
            let message = format!("Check out this post: {}... {}", preview, url);
            format!("https://wa.me/?text={}", encode(&message))
        }
        ShareTarget::Email => {
            let body = format!(
                "I thought you might be interested in this post:\n\n{}\n\nView it here: {}",
                content, url
            );
            format!(
                "mailto:?subject={}&body={}",
                encode("Check out this community post"),
                encode(&body)
            )
        }
        ShareTarget::Sms => {
            let message = format!("Check out this post: {}", url);
            format!("sms:?body={}", encode(&message))
        }
    }
}

pub fn render(state: &State) -> String {
    let buttons: String = ShareTarget::ALL
        .iter()
        .map(|t| {
            format!(
                r#"<button data-action="share-via" data-post="{}" data-target="{}">{}</button>"#,
                state.post_id,
                t.id(),
                esc(t.label())
            )
        })
        .collect();
    format!(
        r#"<div class="modal" role="dialog" aria-label="Share Post"><div class="card">
<header><h3>Share Post</h3><button data-action="close-modal" aria-label="Close">✕</button></header>
{}
</div></div>"#,
        buttons
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_link_is_the_post_url() {
        assert_eq!(
            share_link(ShareTarget::CopyLink, "https://hub.example/", 7, "x"),
            "https://hub.example/post/7"
        );
    }

    #[test]
    fn whatsapp_message_is_encoded_and_truncated() {
        let content = "a".repeat(150);
        let link = share_link(ShareTarget::WhatsApp, "http://localhost:8080", 1, &content);
        assert!(link.starts_with("https://wa.me/?text=Check%20out%20this%20post%3A%20"));
        let decoded = urlencoding::decode(link.trim_start_matches("https://wa.me/?text=")).unwrap();
        assert!(decoded.contains(&format!("{}... http://localhost:8080/post/1", "a".repeat(100))));
        assert!(!decoded.contains(&"a".repeat(101)));
    }

    #[test]
    fn email_and_sms_targets() {
        let mail = share_link(ShareTarget::Email, "http://h", 2, "Rain & wind");
        assert!(mail.starts_with("mailto:?subject=Check%20out%20this%20community%20post&body="));
        assert!(mail.contains("Rain%20%26%20wind"));
        let sms = share_link(ShareTarget::Sms, "http://h", 2, "ignored");
        assert_eq!(sms, "sms:?body=Check%20out%20this%20post%3A%20http%3A%2F%2Fh%2Fpost%2F2");
        assert_eq!(ShareTarget::from_id("sms"), Some(ShareTarget::Sms));
        assert_eq!(ShareTarget::from_id("fax"), None);
    }
}
