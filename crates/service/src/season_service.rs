use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::season;
use crate::{errors::ServiceError, patch::Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: i32,
    pub season_number: i32,
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub series_id: i32,
}

impl From<season::Model> for SeasonDto {
    fn from(m: season::Model) -> Self {
        Self {
            id: m.id,
            season_number: m.season_number,
            title: m.title,
            release_year: m.release_year,
            series_id: m.series_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeason {
    pub season_number: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub series_id: i32,
}

/// The owning series is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeason {
    #[serde(default)]
    pub season_number: Option<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub release_year: Patch<i32>,
}

#[derive(Clone)]
pub struct SeasonService {
    db: DatabaseConnection,
}

impl SeasonService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<SeasonDto>, ServiceError> {
        let rows = season::Entity::find().order_by_asc(season::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(SeasonDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<SeasonDto>, ServiceError> {
        Ok(season::Entity::find_by_id(id).one(&self.db).await?.map(SeasonDto::from))
    }

    /// Seasons of one series; empty for an unknown series.
    pub async fn list_by_series(&self, series_id: i32) -> Result<Vec<SeasonDto>, ServiceError> {
        let rows = season::Entity::find()
            .filter(season::Column::SeriesId.eq(series_id))
            .order_by_asc(season::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(SeasonDto::from).collect())
    }

    #[instrument(skip(self, input), fields(series_id = input.series_id))]
    pub async fn create(&self, input: CreateSeason) -> Result<SeasonDto, ServiceError> {
        let am = season::ActiveModel {
            season_number: Set(input.season_number),
            title: Set(input.title),
            release_year: Set(input.release_year),
            series_id: Set(input.series_id),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, "season created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateSeason) -> Result<SeasonDto, ServiceError> {
        let found = season::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("season"))?;
        let mut am: season::ActiveModel = found.clone().into();
        if let Some(v) = input.season_number { am.season_number = Set(v); }
        if let Some(v) = input.title.into_update() { am.title = Set(v); }
        if let Some(v) = input.release_year.into_update() { am.release_year = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "season updated");
        Ok(m.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = season::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "season deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series_service::{CreateSeries, SeriesService};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seasons_by_series() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let series = SeriesService::new(db.clone());
        let svc = SeasonService::new(db);

        let a = series.create(CreateSeries { title: "A".into(), ..Default::default() }).await?;
        let b = series.create(CreateSeries { title: "B".into(), ..Default::default() }).await?;
        let s1 = svc.create(CreateSeason { season_number: 1, title: None, release_year: None, series_id: a.id }).await?;
        let s2 = svc.create(CreateSeason { season_number: 2, title: Some("Finale".into()), release_year: None, series_id: a.id }).await?;

        assert_eq!(svc.list_by_series(a.id).await?, vec![s1.clone(), s2.clone()]);
        assert!(svc.list_by_series(b.id).await?.is_empty());
        assert!(svc.list_by_series(9999).await?.is_empty());

        let updated = svc.update(s2.id, UpdateSeason { title: Patch::Clear, ..Default::default() }).await?;
        assert!(updated.title.is_none());
        assert_eq!(updated.series_id, a.id);
        assert_eq!(updated.season_number, 2);
        Ok(())
    }

    #[tokio::test]
    async fn season_for_missing_series_fails_in_storage() -> Result<(), anyhow::Error> {
        let svc = SeasonService::new(get_db().await?);
        let res = svc.create(CreateSeason { season_number: 1, title: None, release_year: None, series_id: 77 }).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        Ok(())
    }
}
