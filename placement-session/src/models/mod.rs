mod identity;
mod role;

pub use identity::Identity;
pub use role::Role;
