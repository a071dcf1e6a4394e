//! The user store: single owner of the signed-in user, the session flag and
//! the global feed. Every mutation goes through a method here and writes the
//! user record through to local persistence before it is committed in memory,
//! so after a successful call memory and storage agree, and after a failed
//! write memory is left as it was.
//!
//! Operations that need a signed-in user do nothing when there is none and
//! report that with `Ok(false)` / `Ok(None)` rather than an error.

use std::sync::Arc;

use crate::core::errors::{HubError, HubResult};
use crate::core::helpers::now_millis;
use crate::core::kv::KeyValue;
use crate::core::seed::sample_feed;
use crate::directory::DirectoryProvider;
use crate::follow;
use crate::models::models::{Post, PostDraft, User, UserUpdate};
use crate::posts;
use crate::storage::Persistence;
use crate::users;

/// Read-only view of the store handed to views. Views cannot reach the
/// mutating methods through it.
pub trait StoreView {
    fn user(&self) -> Option<&User>;
    fn is_authenticated(&self) -> bool;
    fn feed(&self) -> &[Post];
    fn directory(&self) -> &dyn DirectoryProvider;

    fn post(&self, id: u64) -> Option<&Post> {
        self.feed()
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.user().and_then(|u| u.posts.iter().find(|p| p.id == id)))
    }

    fn is_following(&self, id: &str) -> bool {
        self.user()
            .map(|u| follow::is_following(&u.following, id))
            .unwrap_or(false)
    }
}

pub struct UserStore<K: KeyValue> {
    persistence: Persistence<K>,
    directory: Arc<dyn DirectoryProvider>,
    user: Option<User>,
    authenticated: bool,
    feed: Vec<Post>,
    last_post_id: u64,
}

impl<K: KeyValue> UserStore<K> {
    /// Opens the store over `kv`, restoring a persisted session if there is one.
    pub fn open(kv: K, directory: Arc<dyn DirectoryProvider>) -> Self {
        let persistence = Persistence::new(kv);
        let session = persistence.load();
        let feed = sample_feed();
        let last_post_id = feed.iter().map(|p| p.id).max().unwrap_or(0);
        let mut store = Self {
            persistence,
            directory,
            user: None,
            authenticated: false,
            feed,
            last_post_id,
        };
        if let (Some(user), true) = (session.user, session.authenticated) {
            store.adopt(user);
        }
        store
    }

    pub fn persistence(&self) -> &Persistence<K> {
        &self.persistence
    }

    pub fn require_user(&self) -> HubResult<&User> {
        self.user.as_ref().ok_or(HubError::NotAuthenticated)
    }

    /// Replaces the current user with `user` and opens a session. Any record is accepted.
    pub fn login(&mut self, user: User) -> HubResult<()> {
        self.persistence.save(&user)?;
        tracing::info!(user_id = %user.id, "signed in");
        self.adopt(user);
        Ok(())
    }

    /// Ends the session. Memory is always cleared; a failure to clear
    /// storage is still reported.
    pub fn logout(&mut self) -> HubResult<()> {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.authenticated = false;
        self.persistence.clear()
    }

    pub fn update_user(&mut self, update: UserUpdate) -> HubResult<bool> {
        let Some(current) = self.user.as_ref() else {
            tracing::debug!("update_user ignored: nobody is signed in");
            return Ok(false);
        };
        let updated = users::apply_update(current, &update);
        self.commit(updated)?;
        Ok(true)
    }

    /// Prepends a new post to the user's posts and to the feed.
    pub fn add_post(&mut self, draft: PostDraft) -> HubResult<Option<Post>> {
        let Some(current) = self.user.as_ref() else {
            tracing::debug!("add_post ignored: nobody is signed in");
            return Ok(None);
        };
        let id = now_millis().max(self.last_post_id + 1);
        let post = posts::build_post(&draft, id, posts::author_of(current));

        let mut updated = current.clone();
        updated.posts.insert(0, post.clone());
        updated.stats.posts = updated.posts.len() as u32;
        self.commit(updated)?;

        self.last_post_id = id;
        self.feed.insert(0, post.clone());
        tracing::debug!(post_id = id, "post added");
        Ok(Some(post))
    }

    /// Prepends an already built post to the global feed only.
    pub fn add_to_feed(&mut self, post: Post) {
        self.last_post_id = self.last_post_id.max(post.id);
        self.feed.insert(0, post);
    }

    pub fn follow_user(&mut self, id: &str) -> HubResult<bool> {
        let Some(current) = self.user.as_ref() else {
            tracing::debug!("follow_user ignored: nobody is signed in");
            return Ok(false);
        };
        if follow::is_following(&current.following, id) {
            return Ok(true);
        }
        let entry = follow::resolve_entry(self.directory.as_ref(), id);
        let mut updated = current.clone();
        follow::follow_entry(&mut updated.following, entry);
        updated.stats.following = updated.following.len() as u32;
        self.commit(updated)?;
        tracing::debug!(target_id = id, "followed");
        Ok(true)
    }

    pub fn unfollow_user(&mut self, id: &str) -> HubResult<bool> {
        let Some(current) = self.user.as_ref() else {
            tracing::debug!("unfollow_user ignored: nobody is signed in");
            return Ok(false);
        };
        if !follow::is_following(&current.following, id) {
            return Ok(true);
        }
        let mut updated = current.clone();
        follow::unfollow_entry(&mut updated.following, id);
        updated.stats.following = updated.following.len() as u32;
        self.commit(updated)?;
        tracing::debug!(target_id = id, "unfollowed");
        Ok(true)
    }

    /// Returns the post's new liked flag, or `None` for an unknown post.
    pub fn toggle_like(&mut self, post_id: u64) -> HubResult<Option<bool>> {
        let touched = self.touch_post(post_id, |p| {
            posts::toggle_like(p);
        })?;
        Ok(touched.map(|p| p.is_liked))
    }

    pub fn record_comment(&mut self, post_id: u64) -> HubResult<bool> {
        let touched = self.touch_post(post_id, |p| p.comments = p.comments.saturating_add(1))?;
        Ok(touched.is_some())
    }

    pub fn record_share(&mut self, post_id: u64) -> HubResult<bool> {
        let touched = self.touch_post(post_id, |p| p.shares = p.shares.saturating_add(1))?;
        Ok(touched.is_some())
    }

    /// Applies `apply` to the feed copy of a post and, when the signed-in user
    /// owns it, to their copy as well (written through first).
    fn touch_post(&mut self, post_id: u64, apply: impl Fn(&mut Post)) -> HubResult<Option<Post>> {
        let owned = self
            .user
            .as_ref()
            .filter(|u| u.posts.iter().any(|p| p.id == post_id))
            .cloned();
        if let Some(mut updated) = owned {
            if let Some(post) = updated.posts.iter_mut().find(|p| p.id == post_id) {
                apply(post);
            }
            self.commit(updated)?;
        }

        if let Some(post) = self.feed.iter_mut().find(|p| p.id == post_id) {
            apply(post);
            return Ok(Some(post.clone()));
        }
        Ok(self
            .user
            .as_ref()
            .and_then(|u| u.posts.iter().find(|p| p.id == post_id))
            .cloned())
    }

    fn commit(&mut self, user: User) -> HubResult<()> {
        if let Err(e) = self.persistence.save(&user) {
            tracing::error!(user_id = %user.id, "write-through failed: {}", e);
            return Err(e);
        }
        self.user = Some(user);
        Ok(())
    }

    /// Installs a signed-in user and puts their own posts at the front of the feed.
    fn adopt(&mut self, user: User) {
        self.feed.retain(|p| !user.posts.iter().any(|own| own.id == p.id));
        let mut feed = user.posts.clone();
        feed.append(&mut self.feed);
        self.feed = feed;
        self.last_post_id = self
            .feed
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .max(self.last_post_id);
        self.user = Some(user);
        self.authenticated = true;
    }
}

impl<K: KeyValue> StoreView for UserStore<K> {
    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn feed(&self) -> &[Post] {
        &self.feed
    }

    fn directory(&self) -> &dyn DirectoryProvider {
        self.directory.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SESSION_KEY, USER_KEY};
    use crate::core::kv::MemoryStore;
    use crate::directory::MockDirectory;
    use crate::models::models::Category;
    use crate::users::{new_member, NewMember};

    /// Storage whose writes can be switched off, for every key or just one.
    #[derive(Clone, Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: std::rc::Rc<std::cell::Cell<bool>>,
        fail_key: std::rc::Rc<std::cell::Cell<Option<&'static str>>>,
    }

    impl KeyValue for FlakyStore {
        fn get(&self, key: &str) -> HubResult<Option<String>> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> HubResult<()> {
            if self.fail_writes.get() || self.fail_key.get() == Some(key) {
                return Err(HubError::Storage("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }
        fn delete(&self, key: &str) -> HubResult<()> {
            self.inner.delete(key)
        }
    }

    fn anjali() -> User {
        new_member(&NewMember {
            name: "Anjali Rao".into(),
            email: "anjali@example.in".into(),
            location: "Chennai".into(),
        })
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            content: "Hello".into(),
            category: Some(Category::News),
            ..Default::default()
        }
    }

    fn open(kv: MemoryStore) -> UserStore<MemoryStore> {
        UserStore::open(kv, Arc::new(MockDirectory::new()))
    }

    #[test]
    fn mutations_without_user_are_silent_no_ops() {
        let kv = MemoryStore::new();
        let mut store = open(kv.clone());
        assert_eq!(store.update_user(UserUpdate::default()).unwrap(), false);
        assert_eq!(store.add_post(draft("Hi")).unwrap(), None);
        assert_eq!(store.follow_user("u42").unwrap(), false);
        assert_eq!(store.unfollow_user("u42").unwrap(), false);
        assert!(store.user().is_none());
        assert!(kv.is_empty());
        assert!(matches!(store.require_user(), Err(HubError::NotAuthenticated)));
    }

    #[test]
    fn post_ids_stay_distinct_when_added_quickly() {
        let mut store = open(MemoryStore::new());
        store.login(anjali()).unwrap();
        let a = store.add_post(draft("a")).unwrap().unwrap();
        let b = store.add_post(draft("b")).unwrap().unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn failed_write_leaves_memory_untouched() {
        let kv = FlakyStore::default();
        let mut store = UserStore::open(kv.clone(), Arc::new(MockDirectory::new()));
        store.login(anjali()).unwrap();
        let feed_before = store.feed().len();

        kv.fail_writes.set(true);
        let res = store.add_post(draft("Hi"));
        assert!(matches!(res, Err(HubError::Storage(_))));
        assert!(store.user().unwrap().posts.is_empty());
        assert_eq!(store.feed().len(), feed_before);

        let res = store.update_user(UserUpdate {
            location: Some("Madurai".into()),
            ..Default::default()
        });
        assert!(res.is_err());
        assert_eq!(store.user().unwrap().location, "Chennai");
    }

    #[test]
    fn failed_flag_write_leaves_stored_user_alone() {
        let kv = FlakyStore::default();
        let mut store = UserStore::open(kv.clone(), Arc::new(MockDirectory::new()));
        store.login(anjali()).unwrap();

        kv.fail_key.set(Some(SESSION_KEY));
        let res = store.update_user(UserUpdate {
            location: Some("Madurai".into()),
            ..Default::default()
        });
        assert!(matches!(res, Err(HubError::Storage(_))));

        let stored: User = kv.get_json(USER_KEY).unwrap().unwrap();
        assert_eq!(store.user().unwrap().location, "Chennai");
        assert_eq!(stored.location, store.user().unwrap().location);
    }

    #[test]
    fn liking_own_post_is_persisted() {
        let kv = MemoryStore::new();
        let mut store = open(kv.clone());
        store.login(anjali()).unwrap();
        let post = store.add_post(draft("Hi")).unwrap().unwrap();

        assert_eq!(store.toggle_like(post.id).unwrap(), Some(true));
        let reopened = open(kv);
        assert_eq!(reopened.user().unwrap().posts[0].likes, 1);
        assert!(reopened.post(post.id).unwrap().is_liked);
    }

    #[test]
    fn engagement_on_feed_posts_stays_in_memory() {
        let kv = MemoryStore::new();
        let mut store = open(kv.clone());
        assert!(store.record_share(1).unwrap());
        assert!(store.record_comment(1).unwrap());
        assert_eq!(store.post(1).unwrap().shares, 13);
        assert_eq!(store.post(1).unwrap().comments, 6);
        assert!(!store.record_share(9999).unwrap());
        assert_eq!(store.toggle_like(9999).unwrap(), None);
        assert!(kv.is_empty());
    }

    #[test]
    fn following_known_person_uses_directory_record() {
        let mut store = open(MemoryStore::new());
        store.login(anjali()).unwrap();
        assert!(store.follow_user("priya-sharma").unwrap());
        assert!(store.follow_user("priya-sharma").unwrap());
        let user = store.user().unwrap();
        assert_eq!(user.following.len(), 1);
        assert_eq!(user.following[0].name, "Priya Sharma");
        assert_eq!(user.stats.following, 1);
        assert!(store.is_following("priya-sharma"));
    }

    #[test]
    fn restored_posts_lead_the_feed() {
        let kv = MemoryStore::new();
        let mut store = open(kv.clone());
        store.login(anjali()).unwrap();
        let post = store.add_post(draft("Mine")).unwrap().unwrap();

        let reopened = open(kv);
        assert_eq!(reopened.feed()[0].id, post.id);
        assert_eq!(reopened.feed().iter().filter(|p| p.id == post.id).count(), 1);
    }

    #[test]
    fn add_to_feed_leaves_user_alone() {
        let mut store = open(MemoryStore::new());
        store.login(anjali()).unwrap();
        let mut external = store.feed()[0].clone();
        external.id = 500;
        store.add_to_feed(external);
        assert_eq!(store.feed()[0].id, 500);
        assert!(store.user().unwrap().posts.is_empty());
        let next = store.add_post(draft("after")).unwrap().unwrap();
        assert!(next.id > 500);
    }
}
