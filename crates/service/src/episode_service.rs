use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::episode;
use crate::{errors::ServiceError, patch::Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDto {
    pub id: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub air_date: Option<DateTime<Utc>>,
    pub season_id: i32,
}

impl From<episode::Model> for EpisodeDto {
    fn from(m: episode::Model) -> Self {
        Self {
            id: m.id,
            episode_number: m.episode_number,
            title: m.title,
            description: m.description,
            duration_minutes: m.duration_minutes,
            air_date: m.air_date,
            season_id: m.season_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisode {
    pub episode_number: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub air_date: Option<DateTime<Utc>>,
    pub season_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEpisode {
    #[serde(default)]
    pub episode_number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub duration_minutes: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub air_date: Patch<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct EpisodeService {
    db: DatabaseConnection,
}

impl EpisodeService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<EpisodeDto>, ServiceError> {
        let rows = episode::Entity::find().order_by_asc(episode::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(EpisodeDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<EpisodeDto>, ServiceError> {
        Ok(episode::Entity::find_by_id(id).one(&self.db).await?.map(EpisodeDto::from))
    }

    pub async fn list_by_season(&self, season_id: i32) -> Result<Vec<EpisodeDto>, ServiceError> {
        let rows = episode::Entity::find()
            .filter(episode::Column::SeasonId.eq(season_id))
            .order_by_asc(episode::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(EpisodeDto::from).collect())
    }

    #[instrument(skip(self, input), fields(season_id = input.season_id))]
    pub async fn create(&self, input: CreateEpisode) -> Result<EpisodeDto, ServiceError> {
        let am = episode::ActiveModel {
            episode_number: Set(input.episode_number),
            title: Set(input.title),
            description: Set(input.description),
            duration_minutes: Set(input.duration_minutes),
            air_date: Set(input.air_date),
            season_id: Set(input.season_id),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, "episode created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateEpisode) -> Result<EpisodeDto, ServiceError> {
        let found = episode::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("episode"))?;
        let mut am: episode::ActiveModel = found.clone().into();
        if let Some(v) = input.episode_number { am.episode_number = Set(v); }
        if let Some(v) = input.title { am.title = Set(v); }
        if let Some(v) = input.description.into_update() { am.description = Set(v); }
        if let Some(v) = input.duration_minutes.into_update() { am.duration_minutes = Set(v); }
        if let Some(v) = input.air_date.into_update() { am.air_date = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "episode updated");
        Ok(m.into())
    }

    /// Delete an episode and the watch history recorded against it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = episode::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "episode deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::season_service::{CreateSeason, SeasonService};
    use crate::series_service::{CreateSeries, SeriesService};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn episodes_by_season_and_air_date() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let show = SeriesService::new(db.clone()).create(CreateSeries { title: "Andor".into(), ..Default::default() }).await?;
        let season = SeasonService::new(db.clone())
            .create(CreateSeason { season_number: 1, title: None, release_year: Some(2022), series_id: show.id })
            .await?;
        let svc = EpisodeService::new(db);

        let aired = Utc.with_ymd_and_hms(2022, 9, 21, 0, 0, 0).unwrap();
        let ep = svc
            .create(CreateEpisode {
                episode_number: 1,
                title: "Kassa".into(),
                description: None,
                duration_minutes: Some(39),
                air_date: Some(aired),
                season_id: season.id,
            })
            .await?;
        assert_eq!(ep.air_date, Some(aired));
        assert_eq!(svc.list_by_season(season.id).await?, vec![ep.clone()]);

        let updated = svc
            .update(ep.id, UpdateEpisode { title: Some("Kassa (Part 1)".into()), air_date: Patch::Clear, ..Default::default() })
            .await?;
        assert_eq!(updated.title, "Kassa (Part 1)");
        assert!(updated.air_date.is_none());
        assert_eq!(updated.duration_minutes, Some(39));
        Ok(())
    }
}
