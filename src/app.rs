//! Navigation shell. Owns the store, the auth gate, the mounted route with
//! its transient view state, any open post modal and the pending notice.
//!
//! Views only ever see the store through [`StoreView`]; every mutation goes
//! through an intent method here, which calls the matching store operation.
//! Moving to a different route discards the previous view's state.

use std::sync::Arc;

use crate::auth::{self, LoginForm, SignupForm};
use crate::avatar::avatar_or_generated;
use crate::config::{public_origin, APP_NAME};
use crate::core::errors::{HubError, HubResult};
use crate::core::kv::KeyValue;
use crate::core::latency::{simulate, Action};
use crate::directory::DirectoryProvider;
use crate::gate::{Gate, GateEvent, GateState};
use crate::models::models::{Post, User};
use crate::posts::{self, CategoryFilter};
use crate::routes::{self, Route};
use crate::search::SearchFilter;
use crate::store::{StoreView, UserStore};
use crate::templates::render_page;
use crate::users::validate_update;
use crate::views::{
    auth_screens, comments, communities, community_detail, create_post, home, nav, not_found,
    notifications, onboarding, profile, search, share, user_profile, Notice, Page,
};

/// Transient state of whichever screen is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Onboarding(onboarding::State),
    Login(auth_screens::LoginState),
    Signup(auth_screens::SignupState),
    ForgotPassword(auth_screens::ForgotPasswordState),
    Home(home::State),
    Communities(communities::State),
    CommunityDetail(community_detail::State),
    CreatePost(create_post::State),
    Notifications(notifications::State),
    Profile(profile::State),
    UserProfile(user_profile::State),
    Search(search::State),
    NotFound,
}

impl ViewState {
    fn for_route(route: &Route, directory: &dyn DirectoryProvider) -> ViewState {
        match route {
            Route::Onboarding => ViewState::Onboarding(Default::default()),
            Route::Login => ViewState::Login(Default::default()),
            Route::Signup => ViewState::Signup(Default::default()),
            Route::ForgotPassword => ViewState::ForgotPassword(Default::default()),
            Route::Home => ViewState::Home(Default::default()),
            Route::Communities => ViewState::Communities(communities::State::seeded(directory)),
            Route::CommunityDetail(id) => {
                ViewState::CommunityDetail(community_detail::State::seeded(directory, id))
            }
            Route::CreatePost => ViewState::CreatePost(Default::default()),
            Route::Notifications => {
                ViewState::Notifications(notifications::State::seeded(directory))
            }
            Route::Profile => ViewState::Profile(Default::default()),
            Route::UserProfile(id) => ViewState::UserProfile(user_profile::State::new(id)),
            Route::Search { query } => ViewState::Search(search::State::with_query(query.clone())),
            Route::NotFound => ViewState::NotFound,
        }
    }
}

/// Overlay opened from a post card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Comments(comments::State),
    Share(share::State),
}

pub struct App<K: KeyValue> {
    store: UserStore<K>,
    gate: Gate,
    route: Route,
    requested: String,
    view: ViewState,
    modal: Option<Modal>,
    notice: Option<Notice>,
}

impl<K: KeyValue> App<K> {
    /// Opens the store over `kv` and mounts the start screen: home for a
    /// restored session, the onboarding carousel otherwise.
    pub fn new(kv: K, directory: Arc<dyn DirectoryProvider>) -> Self {
        let store = UserStore::open(kv, directory);
        let gate = Gate::new(store.is_authenticated());
        let route = routes::resolve(gate.state(), "/");
        let view = ViewState::for_route(&route, store.directory());
        tracing::info!(app = APP_NAME, gate = ?gate.state(), "shell started");
        Self {
            store,
            gate,
            route,
            requested: "/".to_string(),
            view,
            modal: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &dyn StoreView {
        &self.store
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Resolves `uri` through the gate and mounts the result. Staying on the
    /// same route keeps the current view state.
    pub fn navigate(&mut self, uri: &str) -> &Route {
        let route = routes::resolve(self.gate.state(), uri);
        self.requested = uri.to_string();
        if route != self.route {
            tracing::debug!(from = %self.route.path(), to = %route.path(), "navigate");
            self.view = ViewState::for_route(&route, self.store.directory());
            self.modal = None;
            self.route = route;
        }
        &self.route
    }

    pub fn page(&self) -> Page {
        let store: &dyn StoreView = &self.store;
        let mut page = match &self.view {
            ViewState::Onboarding(s) => onboarding::render(s),
            ViewState::Login(s) => auth_screens::render_login(s),
            ViewState::Signup(s) => auth_screens::render_signup(s),
            ViewState::ForgotPassword(s) => auth_screens::render_forgot_password(s),
            ViewState::Home(s) => home::render(store, s),
            ViewState::Communities(s) => communities::render(store, s),
            ViewState::CommunityDetail(s) => community_detail::render(store, s),
            ViewState::CreatePost(s) => create_post::render(s),
            ViewState::Notifications(s) => notifications::render(s),
            ViewState::Profile(s) => profile::render(store, s),
            ViewState::UserProfile(s) => user_profile::render(store, s),
            ViewState::Search(s) => search::render(store, s),
            ViewState::NotFound => not_found::render(&self.requested),
        };
        match &self.modal {
            Some(Modal::Comments(s)) => page.body.push_str(&comments::render(store, s)),
            Some(Modal::Share(s)) => page.body.push_str(&share::render(s)),
            None => {}
        }
        page
    }

    /// Full HTML document for the mounted screen.
    pub fn render(&self) -> HubResult<String> {
        let nav = self
            .route
            .has_bottom_nav()
            .then(|| nav::render(&self.route.path()));
        render_page(&self.page(), nav.as_deref(), self.notice.as_ref())
    }

    fn settle<T>(&mut self, result: HubResult<T>) -> HubResult<T> {
        if let Err(err) = &result {
            tracing::debug!("intent failed: {}", err);
            self.notice = Some(Notice::from(err));
        }
        result
    }

    fn signed_in(&mut self, message: &str) {
        self.gate.apply(GateEvent::SignedIn);
        self.navigate("/");
        self.notice = Some(Notice::success(message));
    }

    // === Onboarding ===

    pub fn onboarding_next(&mut self) {
        let finished = match &mut self.view {
            ViewState::Onboarding(s) => s.next(),
            _ => false,
        };
        if finished {
            self.finish_onboarding();
        }
    }

    pub fn onboarding_previous(&mut self) {
        if let ViewState::Onboarding(s) = &mut self.view {
            s.previous();
        }
    }

    pub fn onboarding_jump(&mut self, index: usize) {
        if let ViewState::Onboarding(s) = &mut self.view {
            s.jump(index);
        }
    }

    /// "Get started" or "Skip".
    pub fn finish_onboarding(&mut self) {
        self.gate.apply(GateEvent::OnboardingFinished);
        self.navigate("/");
    }

    // === Auth ===

    pub async fn login_with_google(&mut self) -> HubResult<User> {
        let result = auth::login_with_google(&mut self.store).await;
        let user = self.settle(result)?;
        self.signed_in("Successfully logged in with Google!");
        Ok(user)
    }

    pub async fn login_with_email(&mut self, form: LoginForm) -> HubResult<User> {
        if let ViewState::Login(s) = &mut self.view {
            s.form = LoginForm {
                email: form.email.clone(),
                password: String::new(),
            };
        }
        let result = auth::login_with_email(&mut self.store, &form).await;
        let user = self.settle(result)?;
        self.signed_in("Welcome back!");
        Ok(user)
    }

    pub async fn signup(&mut self, form: SignupForm) -> HubResult<User> {
        if let ViewState::Signup(s) = &mut self.view {
            s.form = SignupForm {
                password: String::new(),
                confirm_password: String::new(),
                ..form.clone()
            };
        }
        let result = auth::signup(&mut self.store, &form).await;
        let user = self.settle(result)?;
        self.signed_in(&format!("Welcome to {}!", APP_NAME));
        Ok(user)
    }

    pub async fn request_password_reset(&mut self, email: &str) -> HubResult<()> {
        if let ViewState::ForgotPassword(s) = &mut self.view {
            s.email = email.to_string();
        }
        let result = auth::request_password_reset(email).await;
        let sent_to = self.settle(result)?;
        if let ViewState::ForgotPassword(s) = &mut self.view {
            s.email = sent_to;
            s.sent = true;
        }
        self.notice = Some(Notice::success("Password reset link sent to your email!"));
        Ok(())
    }

    /// Always ends the session in memory and returns to the auth screens;
    /// a failure to clear storage is still reported.
    pub fn logout(&mut self) -> HubResult<()> {
        let result = auth::logout(&mut self.store);
        self.gate.apply(GateEvent::SignedOut);
        self.navigate("/");
        self.notice = Some(Notice::success("Logged out successfully"));
        self.settle(result)
    }

    // === Feed and post cards ===

    pub fn select_category(&mut self, filter: CategoryFilter) {
        if let ViewState::Home(s) = &mut self.view {
            s.filter = filter;
        }
    }

    pub async fn refresh_feed(&mut self) {
        simulate(Action::Refresh).await;
        tracing::debug!(posts = self.store.feed().len(), "feed refreshed");
    }

    /// Returns the new liked flag, or `None` when the post is not in the feed.
    pub fn toggle_like(&mut self, post_id: u64) -> HubResult<Option<bool>> {
        let result = self.store.toggle_like(post_id);
        let liked = self.settle(result)?;
        if let Some(liked) = liked {
            let message = if liked {
                "Added to favorites"
            } else {
                "Removed from favorites"
            };
            self.notice = Some(Notice::success(message));
        }
        Ok(liked)
    }

    pub fn open_comments(&mut self, post_id: u64) {
        self.modal = Some(Modal::Comments(comments::State::new(post_id)));
    }

    pub fn edit_comment(&mut self, text: &str) {
        if let Some(Modal::Comments(s)) = &mut self.modal {
            s.draft = text.to_string();
        }
    }

    /// Adds the viewer's comment to the open comments modal and bumps the
    /// post's counter. Returns `false` for blank text or no open modal.
    pub fn add_comment(&mut self, text: &str) -> HubResult<bool> {
        let (author, avatar) = match self.store.user() {
            Some(user) => (user.name.clone(), avatar_or_generated(&user.avatar, &user.name)),
            None => ("You".to_string(), String::new()),
        };
        let Some(Modal::Comments(state)) = &mut self.modal else {
            return Ok(false);
        };
        let existing = self.store.directory().comments(state.post_id).len();
        if state.add(text, &author, &avatar, existing).is_none() {
            return Ok(false);
        }
        let post_id = state.post_id;
        let result = self.store.record_comment(post_id);
        self.settle(result)?;
        self.notice = Some(Notice::success("Comment added!"));
        Ok(true)
    }

    pub fn open_share(&mut self, post_id: u64) {
        self.modal = Some(Modal::Share(share::State { post_id }));
    }

    /// Builds the link for `target`, counts the share and closes the modal.
    pub fn share_via(&mut self, target: share::ShareTarget) -> HubResult<Option<String>> {
        let Some(Modal::Share(state)) = &self.modal else {
            return Ok(None);
        };
        let post_id = state.post_id;
        let content = self
            .store
            .post(post_id)
            .map(|p| p.content.clone())
            .unwrap_or_default();
        let link = share::share_link(target, &public_origin(), post_id, &content);
        let result = self.store.record_share(post_id);
        self.settle(result)?;
        self.modal = None;
        self.notice = Some(match target {
            share::ShareTarget::CopyLink => Notice::success("Link copied to clipboard!"),
            other => Notice::info(other.label()),
        });
        Ok(Some(link))
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // === Create post ===

    pub fn edit_post_form(&mut self, edit: impl FnOnce(&mut create_post::State)) {
        if let ViewState::CreatePost(s) = &mut self.view {
            edit(s);
        }
    }

    pub fn attach_media(&mut self, mime: &str, url: &str) {
        self.edit_post_form(|s| s.media = Some(create_post::MediaAttachment::from_mime(mime, url)));
    }

    pub fn remove_media(&mut self) {
        self.edit_post_form(|s| s.media = None);
    }

    /// Validates the open form, waits out the simulated upload, adds the
    /// post through the store and resets the form.
    pub async fn submit_post(&mut self) -> HubResult<Post> {
        let result = self.publish().await;
        self.settle(result)
    }

    async fn publish(&mut self) -> HubResult<Post> {
        let draft = match &self.view {
            ViewState::CreatePost(form) => form.to_draft(),
            _ => return Err(HubError::NotFound("Create post form is not open".to_string())),
        };
        posts::validate_draft(&draft)?;
        self.store.require_user()?;
        simulate(Action::CreatePost).await;
        let post = self
            .store
            .add_post(draft)?
            .ok_or(HubError::NotAuthenticated)?;
        if let ViewState::CreatePost(form) = &mut self.view {
            form.reset();
        }
        self.notice = Some(Notice::success(
            "Post Created! Your post has been shared with the community.",
        ));
        Ok(post)
    }

    // === Communities ===

    pub fn search_communities(&mut self, query: &str) {
        if let ViewState::Communities(s) = &mut self.view {
            s.query = query.to_string();
        }
    }

    pub fn toggle_join(&mut self, community_id: &str) {
        let name = self
            .store
            .directory()
            .communities()
            .into_iter()
            .find(|c| c.id == community_id)
            .map(|c| c.name);
        let (ViewState::Communities(s), Some(name)) = (&mut self.view, name) else {
            return;
        };
        let message = if s.toggle_join(community_id) {
            format!("Joined {}!", name)
        } else {
            format!("Left {}", name)
        };
        self.notice = Some(Notice::success(message));
    }

    fn detail_name(&self, id: &str) -> String {
        self.store
            .directory()
            .community(id)
            .map(|c| c.listing.name)
            .unwrap_or_else(|| "this community".to_string())
    }

    pub fn toggle_join_detail(&mut self) {
        let ViewState::CommunityDetail(s) = &self.view else {
            return;
        };
        let name = self.detail_name(&s.community_id);
        if let ViewState::CommunityDetail(s) = &mut self.view {
            s.joined = !s.joined;
            let message = if s.joined {
                format!("Joined community! Welcome to {}! You'll now receive updates.", name)
            } else {
                format!("Left community. You have left {}", name)
            };
            self.notice = Some(Notice::success(message));
        }
    }

    pub fn toggle_community_notifications(&mut self) {
        if let ViewState::CommunityDetail(s) = &mut self.view {
            s.notifications = !s.notifications;
            let message = if s.notifications {
                "Notifications enabled"
            } else {
                "Notifications disabled"
            };
            self.notice = Some(Notice::success(message));
        }
    }

    pub fn select_community_tab(&mut self, tab: community_detail::Tab) {
        if let ViewState::CommunityDetail(s) = &mut self.view {
            s.tab = tab;
        }
    }

    /// Link to the open community page.
    pub fn share_community(&mut self) -> Option<String> {
        let ViewState::CommunityDetail(s) = &self.view else {
            return None;
        };
        let link = format!(
            "{}{}",
            public_origin(),
            Route::CommunityDetail(s.community_id.clone()).path()
        );
        self.notice = Some(Notice::success("Link copied!"));
        Some(link)
    }

    // === Own profile ===

    pub fn select_profile_tab(&mut self, tab: profile::Tab) {
        if let ViewState::Profile(s) = &mut self.view {
            s.tab = tab;
        }
    }

    pub fn open_edit_profile(&mut self) {
        let Some(form) = self.store.user().map(profile::EditForm::from_user) else {
            return;
        };
        if let ViewState::Profile(s) = &mut self.view {
            s.editing = Some(form);
        }
    }

    pub fn edit_profile_form(&mut self, edit: impl FnOnce(&mut profile::EditForm)) {
        if let ViewState::Profile(profile::State { editing: Some(form), .. }) = &mut self.view {
            edit(form);
        }
    }

    pub fn close_edit_profile(&mut self) {
        if let ViewState::Profile(s) = &mut self.view {
            s.editing = None;
        }
    }

    /// Saves the edit-profile modal through the store. Returns `false` when
    /// the modal is not open or nobody is signed in.
    pub fn save_profile(&mut self) -> HubResult<bool> {
        let update = match &self.view {
            ViewState::Profile(profile::State { editing: Some(form), .. }) => form.to_update(),
            _ => return Ok(false),
        };
        let result = validate_update(&update).and_then(|_| self.store.update_user(update));
        let saved = self.settle(result)?;
        if saved {
            self.close_edit_profile();
            self.notice = Some(Notice::success("Profile updated successfully!"));
        }
        Ok(saved)
    }

    pub fn settings_section(&mut self, section: profile::SettingsSection) {
        if let ViewState::Profile(s) = &mut self.view {
            s.section = section;
        }
    }

    pub fn change_email(&mut self, change: profile::EmailChange) -> HubResult<bool> {
        let result = profile::validate_email_change(&change).and_then(|update| {
            validate_update(&update)?;
            self.store.update_user(update)
        });
        let saved = self.settle(result)?;
        if saved {
            self.settings_section(profile::SettingsSection::Main);
            self.notice = Some(Notice::success("Email updated successfully!"));
        }
        Ok(saved)
    }

    pub fn change_password(&mut self, change: profile::PasswordChange) -> HubResult<()> {
        let result = profile::validate_password_change(&change);
        self.settle(result)?;
        self.settings_section(profile::SettingsSection::Main);
        self.notice = Some(Notice::success("Password updated successfully!"));
        Ok(())
    }

    pub fn prompt_delete_account(&mut self) {
        if let ViewState::Profile(s) = &mut self.view {
            s.confirm_delete = true;
        }
    }

    pub fn cancel_delete_account(&mut self) {
        if let ViewState::Profile(s) = &mut self.view {
            s.confirm_delete = false;
        }
    }

    /// There is no account server: deleting signs out and wipes local storage.
    pub fn delete_account(&mut self) -> HubResult<()> {
        self.logout()?;
        self.notice = Some(Notice::success("Account deleted successfully"));
        Ok(())
    }

    // === Other members ===

    fn display_name(&self, id: &str) -> String {
        user_profile::person_or_placeholder(&self.store, id).entry.name
    }

    pub fn follow(&mut self, id: &str) -> HubResult<bool> {
        let result = self.store.follow_user(id);
        let done = self.settle(result)?;
        if done {
            let message = format!("Following. You are now following {}", self.display_name(id));
            self.notice = Some(Notice::success(message));
        }
        Ok(done)
    }

    pub fn unfollow(&mut self, id: &str) -> HubResult<bool> {
        let result = self.store.unfollow_user(id);
        let done = self.settle(result)?;
        if done {
            let message = format!("Unfollowed. You unfollowed {}", self.display_name(id));
            self.notice = Some(Notice::success(message));
        }
        Ok(done)
    }

    pub fn select_user_profile_tab(&mut self, tab: user_profile::Tab) {
        if let ViewState::UserProfile(s) = &mut self.view {
            s.tab = tab;
        }
    }

    // === Notifications ===

    /// Marks the notification read and follows it to its target screen.
    pub fn open_notification(&mut self, id: u32) -> Option<Route> {
        let target = match &mut self.view {
            ViewState::Notifications(s) => s.open(id)?,
            _ => return None,
        };
        self.navigate(&target.path());
        Some(target)
    }

    pub fn mark_all_read(&mut self) {
        if let ViewState::Notifications(s) = &mut self.view {
            s.mark_all_read();
        }
    }

    // === Search ===

    pub fn search(&mut self, query: &str) {
        if let ViewState::Search(s) = &mut self.view {
            s.query = query.to_string();
            let query = Some(query.trim().to_string()).filter(|q| !q.is_empty());
            self.route = Route::Search { query };
        }
    }

    pub fn select_search_filter(&mut self, filter: SearchFilter) {
        if let ViewState::Search(s) = &mut self.view {
            s.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::MemoryStore;
    use crate::directory::MockDirectory;

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new(), Arc::new(MockDirectory::new()))
    }

    #[test]
    fn fresh_start_shows_onboarding() {
        let mut app = app();
        assert_eq!(app.route(), &Route::Onboarding);
        app.navigate("/profile");
        assert_eq!(app.route(), &Route::Onboarding);
        app.finish_onboarding();
        assert_eq!(app.route(), &Route::Login);
        assert_eq!(app.gate_state(), GateState::Unauthenticated);
    }

    #[test]
    fn carousel_finishes_after_last_slide() {
        let mut app = app();
        app.onboarding_next();
        app.onboarding_next();
        assert_eq!(app.route(), &Route::Onboarding);
        app.onboarding_next();
        assert_eq!(app.route(), &Route::Login);
    }

    fn signed_in() -> (MemoryStore, App<MemoryStore>) {
        let kv = MemoryStore::new();
        let mut store = UserStore::open(kv.clone(), Arc::new(MockDirectory::new()));
        store
            .login(crate::users::new_member(&crate::users::NewMember {
                name: "Anjali Rao".into(),
                email: "anjali@example.in".into(),
                location: "Chennai".into(),
            }))
            .unwrap();
        let app = App::new(kv.clone(), Arc::new(MockDirectory::new()));
        (kv, app)
    }

    #[test]
    fn view_state_resets_on_route_change_only() {
        let (_, mut app) = signed_in();
        assert_eq!(app.route(), &Route::Home);

        app.select_category(CategoryFilter::from_id("alert"));
        app.navigate("/");
        assert_eq!(app.view(), &ViewState::Home(home::State { filter: CategoryFilter::from_id("alert") }));

        app.navigate("/communities");
        app.navigate("/");
        assert_eq!(app.view(), &ViewState::Home(home::State::default()));
    }

    #[test]
    fn joining_a_community_toasts_its_name() {
        let (_, mut app) = signed_in();
        app.navigate("/communities");
        let listing = app.store().directory().communities().remove(0);
        let was_joined =
            matches!(app.view(), ViewState::Communities(s) if s.is_joined(&listing.id));
        app.toggle_join(&listing.id);
        let expected = if was_joined {
            format!("Left {}", listing.name)
        } else {
            format!("Joined {}!", listing.name)
        };
        assert_eq!(app.notice().unwrap().message, expected);
    }

    #[test]
    fn deleting_the_account_signs_out() {
        let (kv, mut app) = signed_in();
        app.navigate("/profile");
        app.prompt_delete_account();
        app.delete_account().unwrap();
        assert!(kv.is_empty());
        assert_eq!(app.gate_state(), GateState::Unauthenticated);
        assert_eq!(app.notice().unwrap().message, "Account deleted successfully");
    }

    #[test]
    fn modal_closes_on_navigation() {
        let (_, mut app) = signed_in();
        app.open_share(1);
        app.navigate("/search");
        assert!(app.modal().is_none());
    }

    #[test]
    fn render_wraps_page_in_layout() {
        let app = app();
        let html = app.render().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Welcome to MyCommunityHub"));
        assert!(!html.contains(r#"<nav class="bottom">"#));
    }
}
