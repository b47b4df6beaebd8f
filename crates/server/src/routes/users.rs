//! `/api/users` handlers.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::user_service::{CreateUser, UpdateUser, UserDto};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses((status = 200, description = "All users", body = [UserDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    Ok(Json(state.services.users.list().await?))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "OK", body = UserDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<UserDto>, JsonApiError> {
    state.services.users.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "Created", body = UserDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateUser>) -> Result<Response, JsonApiError> {
    let m = state.services.users.create(input).await?;
    Ok(created("users", m.id, m))
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated", body = UserDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.services.users.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.users.delete(id).await?))
}
