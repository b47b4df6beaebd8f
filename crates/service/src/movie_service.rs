use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::movie;
use crate::{errors::ServiceError, patch::Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub poster_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<movie::Model> for MovieDto {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            release_year: m.release_year,
            genre: m.genre,
            duration_minutes: m.duration_minutes,
            poster_url: m.poster_url,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Partial update. `null` on an optional column clears it.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub release_year: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub genre: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub duration_minutes: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub poster_url: Patch<String>,
}

#[derive(Clone)]
pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<MovieDto>, ServiceError> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(MovieDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<MovieDto>, ServiceError> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?.map(MovieDto::from))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateMovie) -> Result<MovieDto, ServiceError> {
        let am = movie::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            release_year: Set(input.release_year),
            genre: Set(input.genre),
            duration_minutes: Set(input.duration_minutes),
            poster_url: Set(input.poster_url),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, "movie created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateMovie) -> Result<MovieDto, ServiceError> {
        let found = movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("movie"))?;
        let mut am: movie::ActiveModel = found.clone().into();
        if let Some(v) = input.title { am.title = Set(v); }
        if let Some(v) = input.description.into_update() { am.description = Set(v); }
        if let Some(v) = input.release_year.into_update() { am.release_year = Set(v); }
        if let Some(v) = input.genre.into_update() { am.genre = Set(v); }
        if let Some(v) = input.duration_minutes.into_update() { am.duration_minutes = Set(v); }
        if let Some(v) = input.poster_url.into_update() { am.poster_url = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "movie updated");
        Ok(m.into())
    }

    /// Delete a movie; reviews, history and watchlist rows pointing at it go too.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "movie deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn create_populates_server_fields() -> Result<(), anyhow::Error> {
        let svc = MovieService::new(get_db().await?);
        let dune = svc
            .create(CreateMovie { title: "Dune".into(), release_year: Some(2021), ..Default::default() })
            .await?;
        assert!(dune.id > 0);
        assert_eq!(dune.release_year, Some(2021));
        assert!(dune.description.is_none() && dune.genre.is_none());
        assert!(dune.duration_minutes.is_none() && dune.poster_url.is_none());
        assert_eq!(svc.get(dune.id).await?, Some(dune));
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_omitted_and_clears_null() -> Result<(), anyhow::Error> {
        let svc = MovieService::new(get_db().await?);
        let m = svc
            .create(CreateMovie {
                title: "Heat".into(),
                description: Some("LA crime saga".into()),
                genre: Some("Crime".into()),
                duration_minutes: Some(170),
                ..Default::default()
            })
            .await?;

        let input: UpdateMovie = serde_json::from_str(r#"{"genre":"Thriller","description":null}"#)?;
        let updated = svc.update(m.id, input).await?;
        assert_eq!(updated.genre.as_deref(), Some("Thriller"));
        assert!(updated.description.is_none());
        assert_eq!(updated.title, m.title);
        assert_eq!(updated.duration_minutes, m.duration_minutes);
        assert_eq!(updated.created_at, m.created_at);

        let unchanged = svc.update(m.id, UpdateMovie::default()).await?;
        assert_eq!(unchanged, updated);
        Ok(())
    }

    #[tokio::test]
    async fn absent_movie() -> Result<(), anyhow::Error> {
        let svc = MovieService::new(get_db().await?);
        assert!(svc.get(1).await?.is_none());
        assert!(matches!(svc.update(1, UpdateMovie::default()).await, Err(ServiceError::NotFound(_))));
        assert!(!svc.delete(1).await?);
        assert!(svc.list().await?.is_empty());
        Ok(())
    }
}
