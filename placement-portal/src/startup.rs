use axum::{
    http::{header, HeaderValue, Method, Request},
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post},
    Json, Router,
};
use placement_session::Role;
use service_core::middleware::{
    request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    handlers::{admin, app, auth, recruiter, student},
    middleware::{role_guard_middleware, AreaGuard},
    ApiDoc, AppState,
};

pub fn build_router(state: AppState) -> Router {
    let student_routes = Router::new()
        .route("/", get(student::dashboard))
        .route("/jobs", get(student::jobs))
        .route("/applications", get(student::applications))
        .route("/notifications", get(student::notifications))
        .route(
            "/notifications/:id/read",
            post(student::mark_notification_read),
        )
        .route("/notifications/:id", delete(student::delete_notification))
        .layer(from_fn_with_state(
            AreaGuard::new(state.session.clone(), Role::Student),
            role_guard_middleware,
        ));

    let recruiter_routes = Router::new()
        .route("/", get(recruiter::dashboard))
        .route("/jobs", get(recruiter::jobs))
        .route("/applicants", get(recruiter::applicants))
        .layer(from_fn_with_state(
            AreaGuard::new(state.session.clone(), Role::Recruiter),
            role_guard_middleware,
        ));

    let admin_routes = Router::new()
        .route("/", get(admin::dashboard))
        .route("/students", get(admin::students))
        .route("/recruiters", get(admin::recruiters))
        .route(
            "/announcements",
            get(admin::announcements).post(admin::create_announcement),
        )
        .route("/announcements/:id", delete(admin::delete_announcement))
        .layer(from_fn_with_state(
            AreaGuard::new(state.session.clone(), Role::Admin),
            role_guard_middleware,
        ));

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .security
                .allowed_origins
                .iter()
                .filter_map(|o| match o.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                        None
                    }
                })
                .collect::<Vec<HeaderValue>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    Router::new()
        .route("/", get(app::index))
        .route("/health", get(app::health_check))
        .route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/auth/login", post(auth::login))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .nest(Role::Student.dashboard_root(), student_routes)
        .nest(Role::Recruiter.dashboard_root(), recruiter_routes)
        .nest(Role::Admin.dashboard_root(), admin_routes)
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}
