//! The signed-in member's own profile: header, tabs, the edit-profile modal
//! and account settings.

use crate::core::errors::{HubError, HubResult};
use crate::core::helpers::{format_count, is_blank};
use crate::models::models::{Community, DirectoryEntry, User, UserUpdate};
use crate::routes::Route;
use crate::store::StoreView;
use crate::views::{attr, avatar_html, empty_state, esc, post_card, tab_bar, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Posts,
    Communities,
    Following,
    Settings,
}

impl Tab {
    const ALL: [(&'static str, &'static str); 4] = [
        ("posts", "Posts"),
        ("communities", "Communities"),
        ("following", "Following"),
        ("settings", "Settings"),
    ];

    pub fn from_id(id: &str) -> Tab {
        match id {
            "communities" => Tab::Communities,
            "following" => Tab::Following,
            "settings" => Tab::Settings,
            _ => Tab::Posts,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Communities => "communities",
            Tab::Following => "following",
            Tab::Settings => "settings",
        }
    }
}

/// Edit-profile modal fields. A blank avatar falls back to the generated one on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub location: String,
    pub avatar: String,
}

impl EditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            location: user.location.clone(),
            avatar: user.avatar.clone(),
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: Some(self.name.clone()),
            location: Some(self.location.clone()),
            avatar: Some(self.avatar.clone()),
            ..UserUpdate::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsSection {
    #[default]
    Main,
    Email,
    Password,
    Privacy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailChange {
    pub new_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

pub fn validate_email_change(change: &EmailChange) -> HubResult<UserUpdate> {
    if is_blank(&change.new_email) || change.password.is_empty() {
        return Err(HubError::validation("Please fill in all fields"));
    }
    Ok(UserUpdate {
        email: Some(change.new_email.trim().to_string()),
        ..UserUpdate::default()
    })
}

/// Checks the form only; there is no credential store to update.
pub fn validate_password_change(change: &PasswordChange) -> HubResult<()> {
    if change.current.is_empty() || change.new.is_empty() || change.confirm.is_empty() {
        return Err(HubError::validation("Please fill in all fields"));
    }
    if change.new != change.confirm {
        return Err(HubError::validation("New passwords don't match"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub tab: Tab,
    pub editing: Option<EditForm>,
    pub section: SettingsSection,
    pub confirm_delete: bool,
}

fn stat(value: u32, label: &str) -> String {
    format!(
        r#"<div class="stat"><strong>{}</strong><div class="muted">{}</div></div>"#,
        format_count(value),
        label
    )
}

fn render_community(community: &Community) -> String {
    format!(
        r#"<article class="card"><a href="{}">{}<h3>{}</h3></a><p class="muted">👥 {} members · {}</p></article>"#,
        attr(&Route::CommunityDetail(community.id.clone()).path()),
        avatar_html(community.logo.as_deref().unwrap_or_default(), &community.name, "sm"),
        esc(&community.name),
        format_count(community.members),
        community.role.label()
    )
}

fn render_following(entry: &DirectoryEntry) -> String {
    format!(
        r#"<article class="card person"><a href="{}">{}<strong>{}</strong></a><span class="muted">📍 {}</span><button data-action="unfollow" data-user="{}">Unfollow</button></article>"#,
        attr(&Route::UserProfile(entry.id.clone()).path()),
        avatar_html(&entry.avatar, &entry.name, "sm"),
        esc(&entry.name),
        esc(&entry.location),
        attr(&entry.id)
    )
}

fn render_settings(user: &User, state: &State) -> String {
    let panel = match state.section {
        SettingsSection::Main => r#"<button data-action="settings-section" data-section="email">✉️ Change Email</button>
<button data-action="settings-section" data-section="password">🔒 Change Password</button>
<button data-action="settings-section" data-section="privacy">🛡️ Privacy Policy</button>
<button data-action="delete-account-prompt">🗑️ Delete Account</button>"#
            .to_string(),
        SettingsSection::Email => format!(
            r#"<form data-action="change-email"><label>New Email<input name="email" type="email" value="{}"></label><label>Password<input name="password" type="password"></label><button type="submit">Update Email</button></form>"#,
            attr(&user.email)
        ),
        SettingsSection::Password => r#"<form data-action="change-password"><label>Current Password<input name="current" type="password"></label><label>New Password<input name="new" type="password"></label><label>Confirm New Password<input name="confirm" type="password"></label><button type="submit">Update Password</button></form>"#
            .to_string(),
        SettingsSection::Privacy => r#"<div class="privacy"><h3>Privacy Policy</h3><p>Your profile and posts are stored on this device only. Nothing is sent to a server.</p></div>"#
            .to_string(),
    };
    let back = if state.section == SettingsSection::Main {
        ""
    } else {
        r#"<button data-action="settings-section" data-section="main">← Back</button>"#
    };
    let confirm = if state.confirm_delete {
        r#"<div class="card confirm"><p>Are you sure? This cannot be undone.</p><button data-action="delete-account">Delete</button><button data-action="cancel-delete">Cancel</button></div>"#
    } else {
        ""
    };
    format!(
        r#"<section class="card settings">{}{}{}<button data-action="logout">Log Out</button></section>"#,
        back, panel, confirm
    )
}

fn render_edit_modal(form: &EditForm) -> String {
    format!(
        r#"<div class="modal" role="dialog" aria-label="Edit Profile"><div class="card">
<header><h3>Edit Profile</h3><button data-action="close-edit-profile" aria-label="Close">✕</button></header>
<form data-action="save-profile">
{avatar}
<label>Profile picture<input type="file" accept="image/*" data-action="profile-avatar"></label>
<label>Name<input name="name" value="{name}"></label>
<label>Location<input name="location" value="{location}"></label>
<button type="submit">Save Changes</button>
</form>
</div></div>"#,
        avatar = avatar_html(&form.avatar, &form.name, "lg"),
        name = attr(&form.name),
        location = attr(&form.location),
    )
}

pub fn render(store: &dyn StoreView, state: &State) -> Page {
    let Some(user) = store.user() else {
        return Page::new(
            "Profile",
            empty_state("👤", "Not signed in", "Sign in to see your profile"),
        );
    };
    let panel = match state.tab {
        Tab::Posts if user.posts.is_empty() => empty_state(
            "📝",
            "No posts yet",
            "Share your first post with the community",
        ),
        Tab::Posts => post_card::render_list(&user.posts),
        Tab::Communities if user.communities.is_empty() => empty_state(
            "🏘️",
            "No communities yet",
            "Join a community to see it here",
        ),
        Tab::Communities => user.communities.iter().map(render_community).collect(),
        Tab::Following if user.following.is_empty() => {
            empty_state("👥", "Not following anyone", "Follow people to see them here")
        }
        Tab::Following => user.following.iter().map(render_following).collect(),
        Tab::Settings => render_settings(user, state),
    };
    let bio = if user.bio.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", esc(&user.bio))
    };
    let body = format!(
        r#"<header class="card profile-header">
{avatar}
<h1>{name}</h1>
<p class="muted">📍 {location}</p>
{bio}
<p class="muted">{joined}</p>
<div class="stats">{posts}{communities}{following}{followers}</div>
<button data-action="edit-profile">Edit Profile</button>
</header>
{tabs}
<section class="tab-panel">{panel}</section>
{modal}"#,
        avatar = avatar_html(&user.avatar, &user.name, "xl"),
        name = esc(&user.name),
        location = esc(&user.location),
        bio = bio,
        joined = esc(&user.joined_date),
        posts = stat(user.stats.posts, "Posts"),
        communities = stat(user.stats.communities, "Communities"),
        following = stat(user.stats.following, "Following"),
        followers = stat(user.stats.followers, "Followers"),
        tabs = tab_bar("profile-tab", &Tab::ALL, state.tab.id()),
        panel = panel,
        modal = state.editing.as_ref().map(render_edit_modal).unwrap_or_default(),
    );
    Page::new("Profile", body)
}
