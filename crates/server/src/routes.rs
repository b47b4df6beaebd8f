use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::Services;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod episodes;
pub mod movies;
pub mod reviews;
pub mod seasons;
pub mod series;
pub mod users;
pub mod watch_history;
pub mod watchlist;

/// Shared handler state: the service bundle over one pool.
#[derive(Clone)]
pub struct ServerState {
    pub services: Services,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// 201 with the new resource and its `Location`.
pub(crate) fn created<T: Serialize>(collection: &str, id: i32, body: T) -> Response {
    let location = format!("/api/{collection}/{id}");
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

/// 204 when a row went away, empty 404 otherwise.
pub(crate) fn deleted(removed: bool) -> StatusCode {
    if removed { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND }
}

/// Build the full application router: health, API, and Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/api/movies", get(movies::list).post(movies::create))
        .route("/api/movies/:id", get(movies::get).put(movies::update).delete(movies::delete))
        .route("/api/series", get(series::list).post(series::create))
        .route("/api/series/:id", get(series::get).put(series::update).delete(series::delete))
        .route("/api/seasons", get(seasons::list).post(seasons::create))
        .route("/api/seasons/:id", get(seasons::get).put(seasons::update).delete(seasons::delete))
        .route("/api/seasons/series/:series_id", get(seasons::list_by_series))
        .route("/api/episodes", get(episodes::list).post(episodes::create))
        .route("/api/episodes/:id", get(episodes::get).put(episodes::update).delete(episodes::delete))
        .route("/api/episodes/season/:season_id", get(episodes::list_by_season))
        .route("/api/reviews", get(reviews::list).post(reviews::create))
        .route("/api/reviews/:id", get(reviews::get).put(reviews::update).delete(reviews::delete))
        .route("/api/watchhistory", get(watch_history::list).post(watch_history::create))
        .route(
            "/api/watchhistory/:id",
            get(watch_history::get).put(watch_history::update).delete(watch_history::delete),
        )
        .route("/api/watchhistory/user/:user_id", get(watch_history::list_by_user))
        .route("/api/watchlist", get(watchlist::list).post(watchlist::create))
        .route("/api/watchlist/:id", get(watchlist::get).delete(watchlist::delete))
        .route("/api/watchlist/user/:user_id", get(watchlist::list_by_user))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One span per request with method and path, at INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Status and latency on response
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
