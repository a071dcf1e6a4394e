use chrono::Utc;
use uuid::Uuid;

use crate::avatar::{avatar_or_generated, generate_avatar_from_name};
use crate::config::*;
use crate::core::errors::{HubError, HubResult};
use crate::core::helpers::{is_blank, joined_label, sanitize_text};
use crate::models::models::{User, UserStats, UserUpdate};

/// Fields collected by the signup screen, already validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub location: String,
}

pub fn new_member(member: &NewMember) -> User {
    let name = sanitize_text(&member.name);
    User {
        id: Uuid::new_v4().to_string(),
        avatar: generate_avatar_from_name(&name),
        name,
        email: member.email.trim().to_string(),
        location: sanitize_text(&member.location),
        bio: String::new(),
        joined_date: joined_label(Utc::now()),
        posts: Vec::new(),
        followers: Vec::new(),
        following: Vec::new(),
        communities: Vec::new(),
        stats: UserStats::default(),
    }
}

/// Display name for someone signing in with only an email: "anjali.rao@x.in" -> "Anjali Rao".
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let name = local
        .split(|c: char| c == '.' || c == '_' || c == '-' || c == '+')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        "Community Member".to_string()
    } else {
        name
    }
}

pub fn validate_update(update: &UserUpdate) -> HubResult<()> {
    if let Some(name) = &update.name {
        if is_blank(name) {
            return Err(HubError::validation("Name is required"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(HubError::validation("Name is too long"));
        }
    }
    if let Some(email) = &update.email {
        if is_blank(email) || !email.contains('@') {
            return Err(HubError::validation("Please enter a valid email"));
        }
    }
    if let Some(bio) = &update.bio {
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Err(HubError::validation("Bio too long (max 500 chars)"));
        }
    }
    Ok(())
}

/// Shallow merge: only the fields present in `update` change.
pub fn apply_update(user: &User, update: &UserUpdate) -> User {
    let mut merged = user.clone();
    if let Some(name) = &update.name {
        merged.name = sanitize_text(name);
    }
    if let Some(email) = &update.email {
        merged.email = email.trim().to_string();
    }
    if let Some(location) = &update.location {
        merged.location = sanitize_text(location);
    }
    if let Some(bio) = &update.bio {
        merged.bio = sanitize_text(bio);
    }
    if let Some(avatar) = &update.avatar {
        merged.avatar = avatar_or_generated(avatar, &merged.name);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> NewMember {
        NewMember {
            name: "Anjali Rao".to_string(),
            email: "anjali@example.in".to_string(),
            location: "Chennai".to_string(),
        }
    }

    #[test]
    fn new_member_starts_empty() {
        let user = new_member(&member());
        assert!(crate::core::helpers::validate_uuid(&user.id));
        assert_eq!(user.name, "Anjali Rao");
        assert_eq!(user.stats, UserStats::default());
        assert_eq!(user.avatar, generate_avatar_from_name("Anjali Rao"));
        assert!(user.joined_date.starts_with("Joined "));
    }

    #[test]
    fn update_only_touches_given_fields() {
        let user = new_member(&member());
        let update = UserUpdate {
            location: Some("X".to_string()),
            ..Default::default()
        };
        let merged = apply_update(&user, &update);
        assert_eq!(merged.location, "X");
        assert_eq!(User { location: user.location.clone(), ..merged }, user);
    }

    #[test]
    fn blank_avatar_update_regenerates() {
        let user = new_member(&member());
        let update = UserUpdate {
            name: Some("Meena K".to_string()),
            avatar: Some(String::new()),
            ..Default::default()
        };
        let merged = apply_update(&user, &update);
        assert_eq!(merged.avatar, generate_avatar_from_name("Meena K"));
    }

    #[test]
    fn names_from_emails() {
        assert_eq!(name_from_email("anjali.rao@x.in"), "Anjali Rao");
        assert_eq!(name_from_email("@x.in"), "Community Member");
    }

    #[test]
    fn update_validation() {
        let blank = UserUpdate { name: Some(" ".into()), ..Default::default() };
        assert!(matches!(validate_update(&blank), Err(HubError::Validation(_))));
        let bad_email = UserUpdate { email: Some("nope".into()), ..Default::default() };
        assert!(validate_update(&bad_email).is_err());
        assert!(validate_update(&UserUpdate::default()).is_ok());
    }
}
