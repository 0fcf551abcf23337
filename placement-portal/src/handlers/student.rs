use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use super::parse_status;
use crate::{
    dtos::dashboard::{
        JobBoard, JobQuery, NotificationFeed, StatusQuery, StudentApplications, StudentOverview,
    },
    middleware::CurrentIdentity,
    models::Notification,
    services::PortalError,
    AppState,
};

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<StudentOverview> {
    Json(state.dashboard.student_overview(&identity).await)
}

pub async fn jobs(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<JobQuery>,
) -> Json<JobBoard> {
    Json(state.dashboard.student_jobs(&identity, &query))
}

pub async fn applications(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StudentApplications>, AppError> {
    let status = parse_status(query.status.as_deref())?;
    Ok(Json(state.dashboard.student_applications(&identity, status)))
}

pub async fn notifications(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<NotificationFeed> {
    Json(state.dashboard.student_notifications(&identity).await)
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> Result<Json<Notification>, PortalError> {
    let notification = state.notices.mark_read(identity.id(), &id).await?;
    Ok(Json(notification))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> Result<StatusCode, PortalError> {
    state.notices.delete_notification(identity.id(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
