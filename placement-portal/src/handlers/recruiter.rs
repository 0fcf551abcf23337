use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;

use super::parse_status;
use crate::{
    dtos::dashboard::{RecruiterApplicants, RecruiterJob, RecruiterOverview, StatusQuery},
    middleware::CurrentIdentity,
    AppState,
};

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<RecruiterOverview> {
    Json(state.dashboard.recruiter_overview(&identity).await)
}

/// Jobs posted by the logged-in recruiter.
pub async fn jobs(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<Vec<RecruiterJob>> {
    Json(state.dashboard.recruiter_jobs(&identity))
}

pub async fn applicants(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<StatusQuery>,
) -> Result<Json<RecruiterApplicants>, AppError> {
    let status = parse_status(query.status.as_deref())?;
    Ok(Json(state.dashboard.recruiter_applicants(&identity, status)))
}
