//! Local persistence of the signed-in user and the session flag.
//!
//! Layout: `user` holds the user JSON, `isAuthenticated` holds the literal
//! `"true"` while a session exists. Both keys are absent otherwise.

use crate::config::*;
use crate::core::errors::HubResult;
use crate::core::kv::KeyValue;
use crate::models::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl Session {
    pub fn signed_out() -> Self {
        Session::default()
    }
}

pub struct Persistence<K: KeyValue> {
    kv: K,
}

impl<K: KeyValue> Persistence<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    /// Restores the session written by [`save`](Self::save). Unreadable or
    /// corrupt state is logged, wiped and treated as signed out.
    pub fn load(&self) -> Session {
        let flag = match self.kv.get(SESSION_KEY) {
            Ok(flag) => flag,
            Err(e) => {
                tracing::warn!("Could not read session flag: {}", e);
                return Session::signed_out();
            }
        };
        if flag.as_deref() != Some(SESSION_FLAG_VALUE) {
            return Session::signed_out();
        }

        match self.kv.get_json::<User>(USER_KEY) {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.id, "restored session");
                Session {
                    user: Some(user),
                    authenticated: true,
                }
            }
            Ok(None) => Session::signed_out(),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {}", e);
                if let Err(e) = self.clear() {
                    tracing::error!("Could not clear stored session: {}", e);
                }
                Session::signed_out()
            }
        }
    }

    /// Flag first, user last: a failed write leaves the stored user as it was.
    pub fn save(&self, user: &User) -> HubResult<()> {
        self.kv.set(SESSION_KEY, SESSION_FLAG_VALUE)?;
        self.kv.set_json(USER_KEY, user)
    }

    pub fn clear(&self) -> HubResult<()> {
        self.kv.delete(USER_KEY)?;
        self.kv.delete(SESSION_KEY)
    }
}
