use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

use crate::{
    dtos::{
        auth::{AuthResponse, LoginRequest, SessionResponse, SignupRequest, UserResponse},
        MessageResponse,
    },
    services::PortalError,
    utils::ValidatedJson,
    AppState,
};

/// Log in as a student, recruiter or admin
///
/// Any non-empty email and password are accepted. Unknown student and
/// recruiter emails get a demo identity.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Malformed body or unknown role", body = crate::dtos::ErrorResponse),
        (status = 401, description = "Email or password missing", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Session could not be saved", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let identity = state
        .session
        .login(&req.email, &req.password, req.role)
        .await?;
    Ok((StatusCode::OK, Json(AuthResponse::for_identity(&identity))))
}

/// Create a new account and log in as it
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Malformed body, missing field or passwords do not match", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Session could not be saved", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, PortalError> {
    if req.password != req.confirm_password {
        return Err(AppError::BadRequest(anyhow::anyhow!("Passwords do not match")).into());
    }

    let identity = state
        .session
        .signup(&req.email, &req.password, &req.name, req.role)
        .await?;
    Ok((StatusCode::CREATED, Json(AuthResponse::for_identity(&identity))))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out successfully", body = MessageResponse),
        (status = 500, description = "Session could not be cleared", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, PortalError> {
    state.session.logout().await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Current session identity
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 503, description = "Session is still being restored", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn me(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let current = state.session.state();
    if current.is_restoring() {
        return Err(AppError::ServiceUnavailable);
    }

    let user = current.identity().map(UserResponse::from);
    Ok(Json(SessionResponse {
        is_authenticated: user.is_some(),
        user,
    }))
}
