use serde::{Deserialize, Serialize};

use super::Role;

/// The authenticated principal held by a session.
///
/// Fields are private: an identity never changes after it is built, a different
/// role means a new login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    email: String,
    name: String,
    role: Role,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Parses a persisted identity. `None` for anything that is not a JSON
    /// object with all four fields, a known role and non-empty `id`/`email`.
    pub fn from_persisted(raw: &str) -> Option<Self> {
        let identity: Identity = serde_json::from_str(raw).ok()?;
        if identity.id.is_empty() || identity.email.is_empty() {
            return None;
        }
        Some(identity)
    }
}
