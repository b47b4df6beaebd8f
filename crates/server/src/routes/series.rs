//! `/api/series` handlers. Deleting a series removes its seasons and episodes.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::series_service::{CreateSeries, SeriesDto, UpdateSeries};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/series", tag = "series",
    responses((status = 200, description = "All series", body = [SeriesDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SeriesDto>>, JsonApiError> {
    Ok(Json(state.services.series.list().await?))
}

#[utoipa::path(
    get, path = "/api/series/{id}", tag = "series",
    params(("id" = i32, Path, description = "Series id")),
    responses(
        (status = 200, description = "OK", body = SeriesDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<SeriesDto>, JsonApiError> {
    state.services.series.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/series", tag = "series",
    request_body = CreateSeries,
    responses(
        (status = 201, description = "Created", body = SeriesDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateSeries>) -> Result<Response, JsonApiError> {
    let m = state.services.series.create(input).await?;
    Ok(created("series", m.id, m))
}

#[utoipa::path(
    put, path = "/api/series/{id}", tag = "series",
    params(("id" = i32, Path, description = "Series id")),
    request_body = UpdateSeries,
    responses(
        (status = 200, description = "Updated", body = SeriesDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateSeries>,
) -> Result<Json<SeriesDto>, JsonApiError> {
    Ok(Json(state.services.series.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/series/{id}", tag = "series",
    params(("id" = i32, Path, description = "Series id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.series.delete(id).await?))
}
