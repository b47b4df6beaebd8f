//! `/api/reviews` handlers. A review names a movie or a series, never both.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::review_service::{CreateReview, ReviewDto, UpdateReview};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/reviews", tag = "reviews",
    responses((status = 200, description = "All reviews", body = [ReviewDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ReviewDto>>, JsonApiError> {
    Ok(Json(state.services.reviews.list().await?))
}

#[utoipa::path(
    get, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "OK", body = ReviewDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ReviewDto>, JsonApiError> {
    state.services.reviews.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/reviews", tag = "reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Created", body = ReviewDto),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateReview>) -> Result<Response, JsonApiError> {
    let m = state.services.reviews.create(input).await?;
    Ok(created("reviews", m.id, m))
}

#[utoipa::path(
    put, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Updated", body = ReviewDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateReview>,
) -> Result<Json<ReviewDto>, JsonApiError> {
    Ok(Json(state.services.reviews.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.reviews.delete(id).await?))
}
