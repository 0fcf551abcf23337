//! placement-session: who is logged in to the placement portal.
//!
//! The [`SessionStore`] owns the current [`Identity`] and keeps it in sync with a
//! [`DurableStorage`] entry. Identities come from the [`IdentityResolver`], which
//! consults a [`Directory`] of reference principals. A [`RoleGuard`] per dashboard
//! area reads the store and either admits the identity or redirects.

pub mod directory;
pub mod error;
pub mod guard;
pub mod ids;
pub mod models;
pub mod navigation;
pub mod resolver;
pub mod storage;
pub mod store;

pub use directory::{Directory, PrincipalRecord, StaticDirectory};
pub use error::{SessionError, StorageError};
pub use guard::{GuardState, RoleGuard};
pub use models::{Identity, Role};
pub use navigation::{Navigator, RecordingNavigator, PUBLIC_ENTRY};
pub use resolver::IdentityResolver;
pub use storage::{DurableStorage, FileStorage, MemoryStorage};
pub use store::{RestoreOutcome, SessionState, SessionStore, DEFAULT_STORAGE_KEY};
