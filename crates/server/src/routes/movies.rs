use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::movie_service::{CreateMovie, MovieDto, UpdateMovie};

use crate::errors::JsonApiError;
use crate::routes::{created, deleted, ServerState};

#[utoipa::path(
    get, path = "/api/movies", tag = "movies",
    responses((status = 200, description = "All movies", body = [MovieDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MovieDto>>, JsonApiError> {
    Ok(Json(state.services.movies.list().await?))
}

#[utoipa::path(
    get, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "OK", body = MovieDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<MovieDto>, JsonApiError> {
    state.services.movies.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/movies", tag = "movies",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Created", body = MovieDto),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateMovie>) -> Result<Response, JsonApiError> {
    let m = state.services.movies.create(input).await?;
    Ok(created("movies", m.id, m))
}

#[utoipa::path(
    put, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "Updated", body = MovieDto),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMovie>,
) -> Result<Json<MovieDto>, JsonApiError> {
    Ok(Json(state.services.movies.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    Ok(deleted(state.services.movies.delete(id).await?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;
    use service::Services;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn create_and_delete_are_logged_once() -> anyhow::Result<()> {
        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let logs = logs.clone();
                move || logs.clone()
            })
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let db = models::db::connect_memory().await?;
        let state = ServerState { services: Services::new(db) };
        let input: CreateMovie = serde_json::from_value(serde_json::json!({"title": "Dune"}))?;

        let res = create(State(state.clone()), Json(input)).await.unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let movie = state.services.movies.list().await?.remove(0);
        assert_eq!(delete(State(state.clone()), Path(movie.id)).await.unwrap(), StatusCode::NO_CONTENT);
        assert_eq!(delete(State(state), Path(movie.id)).await.unwrap(), StatusCode::NOT_FOUND);

        let text = logs.text();
        assert_eq!(text.matches("movie created").count(), 1, "{text}");
        assert_eq!(text.matches("movie deleted").count(), 1, "{text}");
        Ok(())
    }
}
