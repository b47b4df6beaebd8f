use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::series;
use crate::{errors::ServiceError, patch::Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<series::Model> for SeriesDto {
    fn from(m: series::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            release_year: m.release_year,
            genre: m.genre,
            poster_url: m.poster_url,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeries {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeries {
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
    #[schema(value_type = Option<String>)]
    pub poster_url: Patch<String>,
}

#[derive(Clone)]
pub struct SeriesService {
    db: DatabaseConnection,
}

impl SeriesService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<SeriesDto>, ServiceError> {
        let rows = series::Entity::find().order_by_asc(series::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(SeriesDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<SeriesDto>, ServiceError> {
        Ok(series::Entity::find_by_id(id).one(&self.db).await?.map(SeriesDto::from))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateSeries) -> Result<SeriesDto, ServiceError> {
        let am = series::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            release_year: Set(input.release_year),
            genre: Set(input.genre),
            poster_url: Set(input.poster_url),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, "series created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateSeries) -> Result<SeriesDto, ServiceError> {
        let found = series::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("series"))?;
        let mut am: series::ActiveModel = found.clone().into();
        if let Some(v) = input.title { am.title = Set(v); }
        if let Some(v) = input.description.into_update() { am.description = Set(v); }
        if let Some(v) = input.release_year.into_update() { am.release_year = Set(v); }
        if let Some(v) = input.genre.into_update() { am.genre = Set(v); }
        if let Some(v) = input.poster_url.into_update() { am.poster_url = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "series updated");
        Ok(m.into())
    }

    /// Delete a series. Storage cascades to seasons, their episodes, and
    /// every review, watchlist and history row hanging off them.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = series::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "series deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn series_crud_service() -> Result<(), anyhow::Error> {
        let svc = SeriesService::new(get_db().await?);
        let s = svc
            .create(CreateSeries { title: "Dark".into(), genre: Some("Mystery".into()), ..Default::default() })
            .await?;
        assert_eq!(svc.list().await?, vec![s.clone()]);

        let updated = svc
            .update(s.id, UpdateSeries { release_year: Patch::Set(2017), genre: Patch::Clear, ..Default::default() })
            .await?;
        assert_eq!(updated.release_year, Some(2017));
        assert!(updated.genre.is_none());
        assert_eq!(updated.title, "Dark");

        assert!(svc.delete(s.id).await?);
        assert!(!svc.delete(s.id).await?);
        Ok(())
    }
}
