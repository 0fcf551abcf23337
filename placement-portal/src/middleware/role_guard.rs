use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use placement_session::{GuardState, Identity, Role, RoleGuard, SessionStore, PUBLIC_ENTRY};
use std::sync::Arc;

use crate::services::PendingRedirect;

/// Seconds a client is told to wait while the session is still restoring.
const RESTORE_RETRY_AFTER: &str = "1";

/// Middleware state for one dashboard area.
#[derive(Clone)]
pub struct AreaGuard {
    pub session: Arc<SessionStore>,
    pub guard: RoleGuard,
}

impl AreaGuard {
    pub fn new(session: Arc<SessionStore>, area: Role) -> Self {
        Self {
            session,
            guard: RoleGuard::new(area),
        }
    }
}

/// Admits a request to the area only when the session identity has the
/// area's role.
pub async fn role_guard_middleware(
    State(area): State<AreaGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    let navigator = PendingRedirect::new();

    match area.guard.check(&area.session, &navigator) {
        GuardState::Loading => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, RESTORE_RETRY_AFTER)],
        )
            .into_response(),
        GuardState::Redirecting(fallback) => {
            let target = navigator.take().unwrap_or_else(|| fallback.to_string());
            Redirect::to(&target).into_response()
        }
        GuardState::Authorized(identity) => {
            req.extensions_mut().insert(CurrentIdentity(identity));
            next.run(req).await
        }
    }
}

/// Identity admitted by the role guard.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentIdentity>()
            .cloned()
            .ok_or_else(|| Redirect::to(PUBLIC_ENTRY))
    }
}
