use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use placement_session::{Role, SessionState};
use service_core::error::AppError;

use crate::{
    dtos::auth::{DemoAccount, HealthResponse, LandingResponse},
    AppState,
};

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let session = match state.session.state() {
        SessionState::Restoring => "restoring",
        SessionState::Ready(None) => "anonymous",
        SessionState::Ready(Some(_)) => "authenticated",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        session: session.to_string(),
    })
}

/// Public entry point
///
/// A logged-in session is sent on to its dashboard.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page for visitors", body = LandingResponse),
        (status = 303, description = "Redirect to the session's dashboard"),
        (status = 503, description = "Session is still being restored", body = crate::dtos::ErrorResponse)
    ),
    tag = "Portal"
)]
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.session.state() {
        SessionState::Restoring => Err(AppError::ServiceUnavailable),
        SessionState::Ready(Some(identity)) => {
            Ok(Redirect::to(identity.role().dashboard_root()).into_response())
        }
        SessionState::Ready(None) => Ok((StatusCode::OK, Json(landing(&state))).into_response()),
    }
}

fn landing(state: &AppState) -> LandingResponse {
    let mut demo_accounts: Vec<DemoAccount> = Vec::new();
    if let Some(student) = state.catalog.students.first() {
        demo_accounts.push(DemoAccount {
            role: Role::Student,
            email: student.email.clone(),
        });
    }
    if let Some(recruiter) = state.catalog.recruiters.first() {
        demo_accounts.push(DemoAccount {
            role: Role::Recruiter,
            email: recruiter.email.clone(),
        });
    }
    demo_accounts.push(DemoAccount {
        role: Role::Admin,
        email: "admin@college.edu".to_string(),
    });

    LandingResponse {
        message: "Welcome to the campus placement portal".to_string(),
        roles: Role::ALL.to_vec(),
        demo_accounts,
        password_hint: "Any non-empty password works".to_string(),
    }
}
