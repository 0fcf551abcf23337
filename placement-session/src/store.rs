use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::{
    error::{SessionError, StorageError},
    models::{Identity, Role},
    resolver::IdentityResolver,
    storage::DurableStorage,
};

pub const DEFAULT_STORAGE_KEY: &str = "placement_user";

/// What a consumer can observe about the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted entry has not been read yet.
    Restoring,
    Ready(Option<Identity>),
}

impl SessionState {
    pub fn is_restoring(&self) -> bool {
        matches!(self, SessionState::Restoring)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Ready(identity) => identity.as_ref(),
            SessionState::Restoring => None,
        }
    }
}

/// Result of [`SessionStore::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing was persisted.
    Empty,
    Restored,
    /// The entry was unreadable and has been dropped.
    Discarded,
}

/// The single holder of "who is logged in".
///
/// Mutations are serialized and write the durable entry before the in-memory
/// state is replaced; a failed write leaves both untouched.
pub struct SessionStore {
    resolver: IdentityResolver,
    storage: Arc<dyn DurableStorage>,
    storage_key: String,
    state: watch::Sender<SessionState>,
    writer: Mutex<()>,
}

impl SessionStore {
    pub fn new(
        resolver: IdentityResolver,
        storage: Arc<dyn DurableStorage>,
        storage_key: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Restoring);
        Self {
            resolver,
            storage,
            storage_key: storage_key.into(),
            state,
            writer: Mutex::new(()),
        }
    }

    /// Loads the persisted identity, if any, and leaves the `Restoring` state.
    ///
    /// Never fails: unreadable storage or a malformed entry yields an
    /// unauthenticated session.
    pub async fn restore(&self) -> RestoreOutcome {
        let _guard = self.writer.lock().await;

        let raw = match self.storage.get_item(&self.storage_key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "Could not read persisted session");
                self.state.send_replace(SessionState::Ready(None));
                return RestoreOutcome::Discarded;
            }
        };

        let Some(raw) = raw else {
            self.state.send_replace(SessionState::Ready(None));
            return RestoreOutcome::Empty;
        };

        match Identity::from_persisted(&raw) {
            Some(identity) => {
                tracing::info!(user_id = %identity.id(), role = %identity.role(), "Session restored");
                self.state.send_replace(SessionState::Ready(Some(identity)));
                RestoreOutcome::Restored
            }
            None => {
                tracing::warn!(key = %self.storage_key, "Discarding malformed persisted session");
                if let Err(e) = self.storage.remove_item(&self.storage_key).await {
                    tracing::warn!(key = %self.storage_key, error = %e, "Failed to remove malformed session entry");
                }
                self.state.send_replace(SessionState::Ready(None));
                RestoreOutcome::Discarded
            }
        }
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        let identity = self.resolver.resolve_login(email, password, role)?;
        let identity = self.install(identity).await?;
        tracing::info!(user_id = %identity.id(), role = %identity.role(), "User logged in");
        Ok(identity)
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        let identity = self.resolver.resolve_signup(email, password, name, role)?;
        let identity = self.install(identity).await?;
        tracing::info!(user_id = %identity.id(), role = %identity.role(), "User signed up");
        Ok(identity)
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        let _guard = self.writer.lock().await;
        self.storage.remove_item(&self.storage_key).await?;
        let previous = self.state.send_replace(SessionState::Ready(None));
        if let Some(identity) = previous.identity() {
            tracing::info!(user_id = %identity.id(), role = %identity.role(), "User logged out");
        }
        Ok(())
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().identity().is_some()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// A change feed of the session state, starting at the current value.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    async fn install(&self, identity: Identity) -> Result<Identity, SessionError> {
        let raw = serde_json::to_string(&identity).map_err(StorageError::from)?;

        let _guard = self.writer.lock().await;
        self.storage.set_item(&self.storage_key, &raw).await?;
        self.state
            .send_replace(SessionState::Ready(Some(identity.clone())));
        Ok(identity)
    }
}
