use placement_session::{Identity, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Any non-empty email and password are accepted, whatever their length.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "arjun.kumar@college.edu")]
    pub email: String,

    #[schema(example = "anything")]
    pub password: String,

    #[schema(value_type = String, example = "student")]
    pub role: Role,
}

/// Every field must be non-empty; no length limits apply.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "new.student@college.edu")]
    pub email: String,

    #[schema(example = "secret")]
    pub password: String,

    #[schema(example = "secret")]
    pub confirm_password: String,

    #[schema(example = "New Student")]
    pub name: String,

    #[schema(value_type = String, example = "student")]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "student_1")]
    pub id: String,
    #[schema(example = "arjun.kumar@college.edu")]
    pub email: String,
    #[schema(example = "Arjun Kumar")]
    pub name: String,
    #[schema(value_type = String, example = "student")]
    pub role: Role,
}

impl From<&Identity> for UserResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id().to_string(),
            email: identity.email().to_string(),
            name: identity.name().to_string(),
            role: identity.role(),
        }
    }
}

/// Returned by login and signup: the new identity and where to go next.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[schema(example = "/dashboard/student")]
    pub redirect_to: String,
}

impl AuthResponse {
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            user: UserResponse::from(identity),
            redirect_to: identity.role().dashboard_root().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DemoAccount {
    #[schema(value_type = String, example = "student")]
    pub role: Role,
    #[schema(example = "arjun.kumar@college.edu")]
    pub email: String,
}

/// Public entry point body for visitors without a session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LandingResponse {
    pub message: String,
    #[schema(value_type = Vec<String>)]
    pub roles: Vec<Role>,
    pub demo_accounts: Vec<DemoAccount>,
    #[schema(example = "Any non-empty password works")]
    pub password_hint: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "placement-portal")]
    pub service: String,
    #[schema(example = "authenticated")]
    pub session: String,
}
