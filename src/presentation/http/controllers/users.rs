// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, UpdateUserCommand},
    dto::{UserDto, UserProfileDto},
    queries::users::{GetUserQuery, ListUsersQuery},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
    pub profile: UserProfileDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub profile: Option<UserProfileDto>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Users, newest first.", body = [UserDto]),
        (status = 403, description = "Caller is not an admin.")
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListUsersParams>,
) -> HttpResult<Json<Vec<UserDto>>> {
    let query = ListUsersQuery {
        skip: params.skip,
        limit: params.limit,
        role: params.role,
        search: params.search,
    };

    state
        .services
        .user_queries
        .list_users(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user.", body = UserDto),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(&user, GetUserQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user.", body = UserDto),
        (status = 409, description = "Username or email already taken.")
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = CreateUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        role: payload.role.unwrap_or(Role::Reporter),
        profile: payload.profile,
    };

    state
        .services
        .user_commands
        .create_user(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user.", body = UserDto),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        username: payload.username,
        email: payload.email,
        role: payload.role,
        profile: payload.profile,
        is_active: payload.is_active,
    };

    state
        .services
        .user_commands
        .update_user(&user, id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed."),
        (status = 400, description = "Attempted self-deletion."),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .delete_user(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}
