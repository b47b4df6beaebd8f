use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::season_service::{CreateSeason, SeasonDto, UpdateSeason};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/seasons", tag = "seasons",
    responses((status = 200, description = "All seasons", body = [SeasonDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SeasonDto>>, JsonApiError> {
    Ok(Json(state.services.seasons.list().await?))
}

#[utoipa::path(
    get, path = "/api/seasons/{id}", tag = "seasons",
    params(("id" = i32, Path, description = "Season id")),
    responses(
        (status = 200, description = "OK", body = SeasonDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<SeasonDto>, JsonApiError> {
    state.services.seasons.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    get, path = "/api/seasons/series/{seriesId}", tag = "seasons",
    params(("seriesId" = i32, Path, description = "Series id")),
    responses((status = 200, description = "Seasons of the series, possibly empty", body = [SeasonDto]))
)]
pub async fn list_by_series(
    State(state): State<ServerState>,
    Path(series_id): Path<i32>,
) -> Result<Json<Vec<SeasonDto>>, JsonApiError> {
    Ok(Json(state.services.seasons.list_by_series(series_id).await?))
}

#[utoipa::path(
    post, path = "/api/seasons", tag = "seasons",
    request_body = CreateSeason,
    responses(
        (status = 201, description = "Created", body = SeasonDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateSeason>) -> Result<Response, JsonApiError> {
    let m = state.services.seasons.create(input).await?;
    Ok(created("seasons", m.id, m))
}

#[utoipa::path(
    put, path = "/api/seasons/{id}", tag = "seasons",
    params(("id" = i32, Path, description = "Season id")),
    request_body = UpdateSeason,
    responses(
        (status = 200, description = "Updated", body = SeasonDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateSeason>,
) -> Result<Json<SeasonDto>, JsonApiError> {
    Ok(Json(state.services.seasons.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/seasons/{id}", tag = "seasons",
    params(("id" = i32, Path, description = "Season id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.seasons.delete(id).await?))
}
