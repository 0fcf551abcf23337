pub mod auth;
pub mod dashboard;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OpenAPI schema of the error body rendered by
/// [`service_core::error::AppError`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid credentials")]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}
