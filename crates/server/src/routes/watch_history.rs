use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::watch_history_service::{CreateWatchHistory, UpdateWatchHistory, WatchHistoryDto};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/watchhistory", tag = "watch history",
    responses((status = 200, description = "All watch history entries", body = [WatchHistoryDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<WatchHistoryDto>>, JsonApiError> {
    Ok(Json(state.services.watch_history.list().await?))
}

#[utoipa::path(
    get, path = "/api/watchhistory/{id}", tag = "watch history",
    params(("id" = i32, Path, description = "Watch history entry id")),
    responses(
        (status = 200, description = "OK", body = WatchHistoryDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<WatchHistoryDto>, JsonApiError> {
    state.services.watch_history.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    get, path = "/api/watchhistory/user/{userId}", tag = "watch history",
    params(("userId" = i32, Path, description = "User id")),
    responses((status = 200, description = "Watch history entries of the user, possibly empty", body = [WatchHistoryDto]))
)]
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<WatchHistoryDto>>, JsonApiError> {
    Ok(Json(state.services.watch_history.list_by_user(user_id).await?))
}

#[utoipa::path(
    post, path = "/api/watchhistory", tag = "watch history",
    request_body = CreateWatchHistory,
    responses(
        (status = 201, description = "Created", body = WatchHistoryDto),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateWatchHistory>) -> Result<Response, JsonApiError> {
    let m = state.services.watch_history.create(input).await?;
    Ok(created("watchhistory", m.id, m))
}

#[utoipa::path(
    put, path = "/api/watchhistory/{id}", tag = "watch history",
    params(("id" = i32, Path, description = "Watch history entry id")),
    request_body = UpdateWatchHistory,
    responses(
        (status = 200, description = "Updated", body = WatchHistoryDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateWatchHistory>,
) -> Result<Json<WatchHistoryDto>, JsonApiError> {
    Ok(Json(state.services.watch_history.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/watchhistory/{id}", tag = "watch history",
    params(("id" = i32, Path, description = "Watch history entry id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.watch_history.delete(id).await?))
}
