use tokio::sync::watch;

use crate::{
    models::{Identity, Role},
    navigation::{Navigator, PUBLIC_ENTRY},
    store::{SessionState, SessionStore},
};

/// Where a guarded area stands for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Session not restored yet; render nothing.
    Loading,
    Authorized(Identity),
    /// Render nothing; the navigator has been sent to the contained path.
    Redirecting(&'static str),
}

/// Gates one dashboard area on the session identity's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard {
    area: Role,
}

impl RoleGuard {
    pub fn new(area: Role) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Role {
        self.area
    }

    /// Pure decision for a session state; performs no navigation.
    pub fn evaluate(&self, state: &SessionState) -> GuardState {
        match state {
            SessionState::Restoring => GuardState::Loading,
            SessionState::Ready(Some(identity)) if identity.role() == self.area => {
                GuardState::Authorized(identity.clone())
            }
            SessionState::Ready(Some(identity)) => {
                tracing::debug!(
                    area = %self.area,
                    role = %identity.role(),
                    user_id = %identity.id(),
                    "Role mismatch, redirecting"
                );
                GuardState::Redirecting(PUBLIC_ENTRY)
            }
            SessionState::Ready(None) => {
                tracing::debug!(area = %self.area, "No session, redirecting");
                GuardState::Redirecting(PUBLIC_ENTRY)
            }
        }
    }

    /// Evaluates against the store's current state and issues the redirect, if
    /// any.
    pub fn check(&self, store: &SessionStore, navigator: &dyn Navigator) -> GuardState {
        self.apply(self.evaluate(&store.state()), navigator)
    }

    /// Waits for the session to leave `Restoring`, then decides.
    ///
    /// Returns `Loading` only if the store is dropped before it restores.
    pub async fn when_ready(
        &self,
        rx: &mut watch::Receiver<SessionState>,
        navigator: &dyn Navigator,
    ) -> GuardState {
        let state = match rx.wait_for(|state| !state.is_restoring()).await {
            Ok(state) => state.clone(),
            Err(_) => return GuardState::Loading,
        };
        self.apply(self.evaluate(&state), navigator)
    }

    /// Waits for the next session change and re-decides. `None` once the store
    /// is gone.
    pub async fn next_change(
        &self,
        rx: &mut watch::Receiver<SessionState>,
        navigator: &dyn Navigator,
    ) -> Option<GuardState> {
        rx.changed().await.ok()?;
        let state = rx.borrow_and_update().clone();
        Some(self.apply(self.evaluate(&state), navigator))
    }

    fn apply(&self, decision: GuardState, navigator: &dyn Navigator) -> GuardState {
        if let GuardState::Redirecting(path) = &decision {
            navigator.navigate(path);
        }
        decision
    }
}
