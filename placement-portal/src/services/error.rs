use axum::response::{IntoResponse, Response};
use placement_session::SessionError;
use service_core::error::AppError;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    App(#[from] AppError),
}

impl From<PortalError> for AppError {
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::Session(SessionError::InvalidCredentials) => {
                AppError::AuthError(anyhow::anyhow!("Invalid credentials"))
            }
            PortalError::Session(SessionError::InvalidInput(reason)) => {
                AppError::BadRequest(anyhow::anyhow!(reason))
            }
            PortalError::Session(SessionError::Storage(e)) => {
                AppError::StorageError(anyhow::Error::new(e))
            }
            PortalError::Catalog(e) => AppError::ConfigError(anyhow::Error::new(e)),
            PortalError::NotFound(what) => AppError::NotFound(anyhow::anyhow!("{} not found", what)),
            PortalError::App(e) => e,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
