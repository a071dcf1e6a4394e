//! Sign-in flows. There is no backend: credentials are checked for presence
//! only, a simulated round trip is awaited, and the resulting member record
//! is handed to the store. Passwords are never kept.

use crate::config::UNKNOWN_LOCATION;
use crate::core::errors::{HubError, HubResult};
use crate::core::helpers::is_blank;
use crate::core::kv::KeyValue;
use crate::core::latency::{simulate, Action};
use crate::models::models::User;
use crate::store::UserStore;
use crate::users::{name_from_email, new_member, NewMember};

const GOOGLE_DEMO_NAME: &str = "Community Member";
const GOOGLE_DEMO_EMAIL: &str = "member@gmail.com";
const GOOGLE_DEMO_LOCATION: &str = "Chennai, Tamil Nadu";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
}

fn require_email(email: &str) -> HubResult<()> {
    if is_blank(email) {
        return Err(HubError::validation("Email is required"));
    }
    if !email.contains('@') {
        return Err(HubError::validation("Please enter a valid email"));
    }
    Ok(())
}

pub fn validate_login(form: &LoginForm) -> HubResult<()> {
    require_email(&form.email)?;
    if form.password.is_empty() {
        return Err(HubError::validation("Password is required"));
    }
    Ok(())
}

pub fn validate_signup(form: &SignupForm) -> HubResult<NewMember> {
    if form.password != form.confirm_password {
        return Err(HubError::validation("Passwords don't match!"));
    }
    if is_blank(&form.name) {
        return Err(HubError::validation("Name is required"));
    }
    require_email(&form.email)?;
    if is_blank(&form.location) {
        return Err(HubError::validation("Location is required"));
    }
    if form.password.is_empty() {
        return Err(HubError::validation("Password is required"));
    }
    Ok(NewMember {
        name: form.name.clone(),
        email: form.email.clone(),
        location: form.location.clone(),
    })
}

pub async fn signup<K: KeyValue>(store: &mut UserStore<K>, form: &SignupForm) -> HubResult<User> {
    let member = validate_signup(form)?;
    simulate(Action::Signup).await;
    let user = new_member(&member);
    store.login(user.clone())?;
    tracing::info!(user_id = %user.id, "signed up");
    Ok(user)
}

pub async fn login_with_email<K: KeyValue>(
    store: &mut UserStore<K>,
    form: &LoginForm,
) -> HubResult<User> {
    validate_login(form)?;
    simulate(Action::EmailLogin).await;
    let user = new_member(&NewMember {
        name: name_from_email(&form.email),
        email: form.email.clone(),
        location: UNKNOWN_LOCATION.to_string(),
    });
    store.login(user.clone())?;
    Ok(user)
}

pub async fn login_with_google<K: KeyValue>(store: &mut UserStore<K>) -> HubResult<User> {
    simulate(Action::GoogleLogin).await;
    let user = new_member(&NewMember {
        name: GOOGLE_DEMO_NAME.to_string(),
        email: GOOGLE_DEMO_EMAIL.to_string(),
        location: GOOGLE_DEMO_LOCATION.to_string(),
    });
    store.login(user.clone())?;
    Ok(user)
}

/// Returns the trimmed address the reset link was "sent" to.
pub async fn request_password_reset(email: &str) -> HubResult<String> {
    require_email(email)?;
    simulate(Action::PasswordReset).await;
    let email = email.trim().to_string();
    tracing::info!(%email, "password reset requested");
    Ok(email)
}

pub fn logout<K: KeyValue>(store: &mut UserStore<K>) -> HubResult<()> {
    store.logout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::MemoryStore;
    use crate::directory::MockDirectory;
    use crate::store::StoreView;
    use std::sync::Arc;

    fn form() -> SignupForm {
        SignupForm {
            name: "Anjali Rao".into(),
            email: "anjali@example.in".into(),
            location: "Chennai".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected_first() {
        let bad = SignupForm { confirm_password: "other".into(), name: String::new(), ..form() };
        match validate_signup(&bad) {
            Err(HubError::Validation(msg)) => assert_eq!(msg, "Passwords don't match!"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn login_needs_both_fields() {
        assert!(validate_login(&LoginForm { email: "a@b.in".into(), password: String::new() }).is_err());
        assert!(validate_login(&LoginForm { email: "ab.in".into(), password: "x".into() }).is_err());
        assert!(validate_login(&LoginForm { email: "a@b.in".into(), password: "x".into() }).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn signup_signs_in_without_storing_password() {
        let kv = MemoryStore::new();
        let mut store = UserStore::open(kv.clone(), Arc::new(MockDirectory::new()));
        let user = signup(&mut store, &form()).await.unwrap();
        assert_eq!(store.user(), Some(&user));
        assert!(store.is_authenticated());
        let raw = kv.get("user").unwrap().unwrap();
        assert!(!raw.contains("secret"));
    }

    #[tokio::test(start_paused = true)]
    async fn email_login_derives_name() {
        let mut store = UserStore::open(MemoryStore::new(), Arc::new(MockDirectory::new()));
        let form = LoginForm { email: "meena.k@example.in".into(), password: "x".into() };
        let user = login_with_email(&mut store, &form).await.unwrap();
        assert_eq!(user.name, "Meena K");
        assert_eq!(user.location, "Unknown");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_requires_email() {
        assert!(request_password_reset(" ").await.is_err());
        assert_eq!(request_password_reset(" a@b.in ").await.unwrap(), "a@b.in");
    }
}
