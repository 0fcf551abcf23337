use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    dtos::dashboard::{AdminOverview, CreateAnnouncementRequest, SearchQuery},
    middleware::CurrentIdentity,
    models::{Announcement, Recruiter, Student},
    services::PortalError,
    utils::ValidatedJson,
    AppState,
};

// The admin views are not scoped to the identity, but still require the
// guard to have admitted one.

pub async fn dashboard(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
) -> Json<AdminOverview> {
    Json(state.dashboard.admin_overview())
}

pub async fn students(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Student>> {
    Json(state.dashboard.admin_students(query.search.as_deref()))
}

pub async fn recruiters(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Recruiter>> {
    Json(state.dashboard.admin_recruiters(query.search.as_deref()))
}

pub async fn announcements(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
) -> Json<Vec<Announcement>> {
    Json(state.notices.announcements().await)
}

pub async fn create_announcement(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
    ValidatedJson(req): ValidatedJson<CreateAnnouncementRequest>,
) -> (StatusCode, Json<Announcement>) {
    let announcement = state
        .notices
        .publish(&req.title, &req.message, req.kind)
        .await;
    (StatusCode::CREATED, Json(announcement))
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    _admin: CurrentIdentity,
    Path(id): Path<String>,
) -> Result<StatusCode, PortalError> {
    state.notices.retract(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
