//! `/api/watchlist` handlers. Entries are created and deleted, not updated.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::watchlist_service::{CreateWatchlist, WatchlistDto};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/watchlist", tag = "watchlist",
    responses((status = 200, description = "All watchlist entries", body = [WatchlistDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<WatchlistDto>>, JsonApiError> {
    Ok(Json(state.services.watchlist.list().await?))
}

#[utoipa::path(
    get, path = "/api/watchlist/{id}", tag = "watchlist",
    params(("id" = i32, Path, description = "Watchlist entry id")),
    responses(
        (status = 200, description = "OK", body = WatchlistDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<WatchlistDto>, JsonApiError> {
    state.services.watchlist.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    get, path = "/api/watchlist/user/{userId}", tag = "watchlist",
    params(("userId" = i32, Path, description = "User id")),
    responses((status = 200, description = "Watchlist entries of the user, possibly empty", body = [WatchlistDto]))
)]
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<WatchlistDto>>, JsonApiError> {
    Ok(Json(state.services.watchlist.list_by_user(user_id).await?))
}

#[utoipa::path(
    post, path = "/api/watchlist", tag = "watchlist",
    request_body = CreateWatchlist,
    responses(
        (status = 201, description = "Created", body = WatchlistDto),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateWatchlist>) -> Result<Response, JsonApiError> {
    let m = state.services.watchlist.create(input).await?;
    Ok(created("watchlist", m.id, m))
}

#[utoipa::path(
    delete, path = "/api/watchlist/{id}", tag = "watchlist",
    params(("id" = i32, Path, description = "Watchlist entry id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.watchlist.delete(id).await?))
}
