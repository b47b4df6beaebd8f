use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::episode_service::{CreateEpisode, EpisodeDto, UpdateEpisode};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/episodes", tag = "episodes",
    responses((status = 200, description = "All episodes", body = [EpisodeDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EpisodeDto>>, JsonApiError> {
    Ok(Json(state.services.episodes.list().await?))
}

#[utoipa::path(
    get, path = "/api/episodes/{id}", tag = "episodes",
    params(("id" = i32, Path, description = "Episode id")),
    responses(
        (status = 200, description = "OK", body = EpisodeDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<EpisodeDto>, JsonApiError> {
    state.services.episodes.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    get, path = "/api/episodes/season/{seasonId}", tag = "episodes",
    params(("seasonId" = i32, Path, description = "Season id")),
    responses((status = 200, description = "Episodes of the season, possibly empty", body = [EpisodeDto]))
)]
pub async fn list_by_season(
    State(state): State<ServerState>,
    Path(season_id): Path<i32>,
) -> Result<Json<Vec<EpisodeDto>>, JsonApiError> {
    Ok(Json(state.services.episodes.list_by_season(season_id).await?))
}

#[utoipa::path(
    post, path = "/api/episodes", tag = "episodes",
    request_body = CreateEpisode,
    responses(
        (status = 201, description = "Created", body = EpisodeDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateEpisode>) -> Result<Response, JsonApiError> {
    let m = state.services.episodes.create(input).await?;
    Ok(created("episodes", m.id, m))
}

#[utoipa::path(
    put, path = "/api/episodes/{id}", tag = "episodes",
    params(("id" = i32, Path, description = "Episode id")),
    request_body = UpdateEpisode,
    responses(
        (status = 200, description = "Updated", body = EpisodeDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateEpisode>,
) -> Result<Json<EpisodeDto>, JsonApiError> {
    Ok(Json(state.services.episodes.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/episodes/{id}", tag = "episodes",
    params(("id" = i32, Path, description = "Episode id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.episodes.delete(id).await?))
}
