//! Services layer: dashboard queries over the catalog, the in-memory notice
//! board, the HTTP-side navigator used by the role guard, and error mapping
//! into responses.

pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod notices;

pub use dashboard::DashboardService;
pub use error::PortalError;
pub use navigation::PendingRedirect;
pub use notices::NoticeBoard;
