//! OpenAPI documentation.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use domain::{User, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserResponse,
            UserEnvelope,
            UserListEnvelope,
            MessageEnvelope,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

// Documentation-only shapes of `common::ApiResponse`.

/// Envelope carrying a single user.
#[derive(Serialize, ToSchema)]
pub struct UserEnvelope {
    pub success: bool,
    pub data: UserResponse,
}

/// Envelope carrying every stored user.
#[derive(Serialize, ToSchema)]
pub struct UserListEnvelope {
    pub success: bool,
    pub data: Vec<UserResponse>,
}

/// Envelope carrying a status message.
#[derive(Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub success: bool,
    #[schema(example = "Usuário não encontrado")]
    pub data: String,
}
