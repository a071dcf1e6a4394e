//! Screens. Each view is a pure function of a read-only store view plus its
//! own transient state, producing a [`Page`]. Interactive elements carry a
//! `data-action` attribute naming the shell intent they trigger.

pub mod auth_screens;
pub mod comments;
pub mod communities;
pub mod community_detail;
pub mod create_post;
pub mod home;
pub mod nav;
pub mod not_found;
pub mod notifications;
pub mod onboarding;
pub mod post_card;
pub mod profile;
pub mod search;
pub mod share;
pub mod user_profile;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::avatar::is_image_reference;
use crate::config::AVATAR_INITIALS;
use crate::core::helpers::initials;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_suffix(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// Transient toast shown above the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }
}

pub(crate) fn esc(text: &str) -> String {
    encode_text(text).to_string()
}

pub(crate) fn attr(text: &str) -> String {
    encode_double_quoted_attribute(text).to_string()
}

/// Picture when the reference is loadable, otherwise the emoji or initials as text.
pub(crate) fn avatar_html(avatar: &str, name: &str, class: &str) -> String {
    if is_image_reference(avatar) {
        format!(
            r#"<img class="avatar {}" src="{}" alt="{}">"#,
            class,
            attr(avatar),
            attr(name)
        )
    } else {
        let fallback = if avatar.trim().is_empty() {
            initials(name, AVATAR_INITIALS)
        } else {
            avatar.trim().to_string()
        };
        format!(
            r#"<span class="avatar {}" title="{}">{}</span>"#,
            class,
            attr(name),
            esc(&fallback)
        )
    }
}

pub(crate) fn empty_state(icon: &str, title: &str, message: &str) -> String {
    format!(
        r#"<div class="empty"><div class="empty-icon">{}</div><h3>{}</h3><p class="muted">{}</p></div>"#,
        icon,
        esc(title),
        esc(message)
    )
}

/// Row of tab buttons; `action` is the intent each one dispatches.
pub(crate) fn tab_bar(action: &str, tabs: &[(&str, &str)], active: &str) -> String {
    let buttons: String = tabs
        .iter()
        .map(|(id, label)| {
            format!(
                r#"<button class="tab{}" data-action="{}" data-tab="{}">{}</button>"#,
                if *id == active { " active" } else { "" },
                action,
                id,
                esc(label)
            )
        })
        .collect();
    format!(r#"<div class="tabs" role="tablist">{}</div>"#, buttons)
}
