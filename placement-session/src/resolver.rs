use std::sync::Arc;

use crate::{
    directory::Directory,
    error::SessionError,
    ids::IdGenerator,
    models::{Identity, Role},
};

pub const ADMIN_ID: &str = "admin_1";
pub const ADMIN_NAME: &str = "Admin User";

/// Maps submitted credentials to an [`Identity`].
///
/// This is a demo authenticator: passwords are only checked for presence and a
/// login that matches no reference record still succeeds with a synthesized
/// identity.
pub struct IdentityResolver {
    directory: Arc<dyn Directory>,
    ids: IdGenerator,
}

impl IdentityResolver {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            directory,
            ids: IdGenerator::new(),
        }
    }

    pub fn resolve_login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        let record = match role {
            Role::Student => self.directory.find_student_by_email(email),
            Role::Recruiter => self.directory.find_recruiter_by_email(email),
            Role::Admin => return Ok(Identity::new(ADMIN_ID, email, ADMIN_NAME, Role::Admin)),
        };

        let identity = match record {
            Some(record) => Identity::new(record.id, record.email, record.name, role),
            None => {
                let id = self.ids.issue(&format!("{}_demo", role));
                tracing::debug!(%role, user_id = %id, "No reference record, synthesizing demo identity");
                Identity::new(id, email, local_part(email), role)
            }
        };

        Ok(identity)
    }

    /// Always mints a fresh identity; an existing reference record with the same
    /// email is not consulted.
    pub fn resolve_signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        if email.is_empty() {
            return Err(SessionError::InvalidInput("email is required"));
        }
        if password.is_empty() {
            return Err(SessionError::InvalidInput("password is required"));
        }
        if name.is_empty() {
            return Err(SessionError::InvalidInput("name is required"));
        }

        Ok(Identity::new(self.ids.issue(role.as_str()), email, name, role))
    }
}

/// Text before the first `@`; the whole string when there is none.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
