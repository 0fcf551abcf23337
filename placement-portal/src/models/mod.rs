//! Reference records served by the portal.
//!
//! These are read-only: the portal never mutates the catalog at runtime.

mod announcement;
mod people;
mod placement;
mod statistics;

pub use announcement::{Announcement, AnnouncementKind};
pub use people::{Recruiter, Student};
pub use placement::{
    Application, ApplicationStatus, Eligibility, JobOpening, Notification, NotificationKind,
};
pub use statistics::{DepartmentStat, PlacementStatistics};
