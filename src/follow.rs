use crate::avatar::{avatar_or_generated, generate_avatar_from_name};
use crate::config::UNKNOWN_LOCATION;
use crate::directory::DirectoryProvider;
use crate::models::models::DirectoryEntry;

/// Adds `entry` unless that id is already followed. Returns whether it was added.
pub fn follow_entry(following: &mut Vec<DirectoryEntry>, entry: DirectoryEntry) -> bool {
    if following.iter().any(|f| f.id == entry.id) {
        return false;
    }
    following.push(entry);
    true
}

/// Removes every entry with `id`. Returns whether anything was removed.
pub fn unfollow_entry(following: &mut Vec<DirectoryEntry>, id: &str) -> bool {
    let before = following.len();
    following.retain(|f| f.id != id);
    following.len() != before
}

pub fn is_following(following: &[DirectoryEntry], id: &str) -> bool {
    following.iter().any(|f| f.id == id)
}

pub fn placeholder_entry(id: &str) -> DirectoryEntry {
    let name = format!("User {}", id);
    DirectoryEntry {
        id: id.to_string(),
        avatar: generate_avatar_from_name(&name),
        name,
        location: UNKNOWN_LOCATION.to_string(),
    }
}

/// Directory record for `id`, or a placeholder when the directory has none.
pub fn resolve_entry(directory: &dyn DirectoryProvider, id: &str) -> DirectoryEntry {
    match directory.person(id) {
        Some(person) => DirectoryEntry {
            avatar: avatar_or_generated(&person.entry.avatar, &person.entry.name),
            ..person.entry
        },
        None => placeholder_entry(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;

    #[test]
    fn follow_is_idempotent() {
        let mut following = Vec::new();
        assert!(follow_entry(&mut following, placeholder_entry("u42")));
        assert!(!follow_entry(&mut following, placeholder_entry("u42")));
        assert_eq!(following.len(), 1);
    }

    #[test]
    fn follow_then_unfollow_restores_list() {
        let mut following = vec![placeholder_entry("a")];
        let before = following.clone();
        follow_entry(&mut following, placeholder_entry("u42"));
        assert!(unfollow_entry(&mut following, "u42"));
        assert_eq!(following, before);
        assert!(!unfollow_entry(&mut following, "u42"));
    }

    #[test]
    fn unknown_ids_get_placeholders() {
        let dir = MockDirectory::new();
        let known = resolve_entry(&dir, "priya-sharma");
        assert_eq!(known.name, "Priya Sharma");
        let unknown = resolve_entry(&dir, "u42");
        assert_eq!(unknown.name, "User u42");
        assert_eq!(unknown.location, "Unknown");
        assert!(unknown.avatar.starts_with("data:image/svg+xml"));
    }
}
