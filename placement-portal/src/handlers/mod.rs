pub mod admin;
pub mod app;
pub mod auth;
pub mod recruiter;
pub mod student;

use service_core::error::AppError;

use crate::models::ApplicationStatus;

/// Parses a `?status=` filter; blank means "any status".
pub(crate) fn parse_status(raw: Option<&str>) -> Result<Option<ApplicationStatus>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e: String| AppError::BadRequest(anyhow::anyhow!(e))),
    }
}
