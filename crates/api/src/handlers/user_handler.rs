//! User handlers.
//!
//! Every response uses the `{ success, data }` envelope. Reads project each
//! stored user into a `UserResponse`, which derives `isOfAge` from `age`.

use axum::{extract::State, response::Json, routing::get, Router};

use common::{ApiResponse, AppResult, Created};
use domain::{User, UserId, UserResponse, MSG_USER_DELETED};

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = crate::openapi::UserListEnvelope)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserEnvelope),
        (status = 400, description = "Malformed user ID", body = crate::openapi::MessageEnvelope),
        (status = 404, description = "User not found", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = crate::openapi::UserEnvelope),
        (status = 400, description = "Malformed request body", body = crate::openapi::MessageEnvelope),
        (status = 500, description = "User could not be created", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<User>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = crate::openapi::MessageEnvelope),
        (status = 400, description = "Malformed user ID", body = crate::openapi::MessageEnvelope),
        (status = 404, description = "User not found", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> AppResult<Json<ApiResponse<String>>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::message(MSG_USER_DELETED)))
}
