//! Auth/onboarding gate deciding which family of screens may mount.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Onboarding,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// "Get started" or "Skip" on the carousel.
    OnboardingFinished,
    SignedIn,
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    /// A restored session skips the carousel. The onboarding-seen flag is
    /// never persisted, so every fresh signed-out start sees it again.
    pub fn new(session_restored: bool) -> Self {
        let state = if session_restored {
            GateState::Authenticated
        } else {
            GateState::Onboarding
        };
        Self { state }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == GateState::Authenticated
    }

    /// Applies `event` and returns the resulting state. Events that make no
    /// sense in the current state leave it unchanged.
    pub fn apply(&mut self, event: GateEvent) -> GateState {
        let next = match (self.state, event) {
            (GateState::Onboarding, GateEvent::OnboardingFinished) => GateState::Unauthenticated,
            (GateState::Onboarding | GateState::Unauthenticated, GateEvent::SignedIn) => {
                GateState::Authenticated
            }
            (GateState::Authenticated, GateEvent::SignedOut) => GateState::Unauthenticated,
            (state, _) => state,
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "gate transition");
        }
        self.state = next;
        next
    }
}
