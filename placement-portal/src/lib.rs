pub mod catalog;
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use placement_session::{DurableStorage, FileStorage, IdentityResolver, SessionStore};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::catalog::Catalog;
use crate::config::PortalConfig;
use crate::services::{DashboardService, NoticeBoard};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::app::health_check,
        handlers::app::index,
        handlers::auth::login,
        handlers::auth::signup,
        handlers::auth::logout,
        handlers::auth::me,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::MessageResponse,
            dtos::auth::LoginRequest,
            dtos::auth::SignupRequest,
            dtos::auth::UserResponse,
            dtos::auth::AuthResponse,
            dtos::auth::SessionResponse,
            dtos::auth::DemoAccount,
            dtos::auth::LandingResponse,
            dtos::auth::HealthResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Mock login, signup and logout for the portal session"),
        (name = "Portal", description = "Public entry point"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Shared application state: the one portal session, the catalog it reads
/// and the notice board it can change.
#[derive(Clone)]
pub struct AppState {
    pub config: PortalConfig,
    pub session: Arc<SessionStore>,
    pub catalog: Arc<Catalog>,
    pub notices: Arc<NoticeBoard>,
    pub dashboard: DashboardService,
}

impl AppState {
    /// State backed by the configured storage file.
    pub fn new(config: PortalConfig, catalog: Catalog) -> Self {
        let storage = Arc::new(FileStorage::new(config.session.storage_path.clone()));
        Self::with_storage(config, catalog, storage)
    }

    pub fn with_storage(
        config: PortalConfig,
        catalog: Catalog,
        storage: Arc<dyn DurableStorage>,
    ) -> Self {
        let notices = Arc::new(NoticeBoard::from_catalog(&catalog));
        let catalog = Arc::new(catalog);
        let resolver = IdentityResolver::new(catalog.clone());
        let session = Arc::new(SessionStore::new(
            resolver,
            storage,
            config.session.storage_key.clone(),
        ));

        Self {
            dashboard: DashboardService::new(catalog.clone(), notices.clone()),
            config,
            session,
            catalog,
            notices,
        }
    }
}
