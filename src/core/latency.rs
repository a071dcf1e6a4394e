//! Fixed delays standing in for network round trips. They always complete;
//! there is no failure branch behind them.

use std::time::Duration;

use crate::config::latency_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Signup,
    EmailLogin,
    GoogleLogin,
    PasswordReset,
    CreatePost,
    Refresh,
}

impl Action {
    fn base_millis(self) -> u64 {
        match self {
            Action::Signup => 1500,
            Action::EmailLogin => 1000,
            Action::GoogleLogin => 2000,
            Action::PasswordReset => 1500,
            Action::CreatePost => 1000,
            Action::Refresh => 1000,
        }
    }
}

pub fn delay_for(action: Action) -> Duration {
    Duration::from_millis(action.base_millis() * latency_percent() / 100)
}

pub async fn simulate(action: Action) {
    let delay = delay_for(action);
    tracing::debug!(?action, ?delay, "simulating network latency");
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
