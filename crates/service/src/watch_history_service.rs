use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::{watch_history, WatchTarget};
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchHistoryDto {
    pub id: i32,
    pub watched_at: DateTime<Utc>,
    pub completed: bool,
    pub user_id: i32,
    pub movie_id: Option<i32>,
    pub episode_id: Option<i32>,
}

impl From<watch_history::Model> for WatchHistoryDto {
    fn from(m: watch_history::Model) -> Self {
        Self {
            id: m.id,
            watched_at: m.watched_at,
            completed: m.completed,
            user_id: m.user_id,
            movie_id: m.movie_id,
            episode_id: m.episode_id,
        }
    }
}

fn default_completed() -> bool { true }

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWatchHistory {
    #[serde(default = "default_completed")]
    pub completed: bool,
    pub user_id: i32,
    #[serde(default)]
    pub movie_id: Option<i32>,
    #[serde(default)]
    pub episode_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWatchHistory {
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Clone)]
pub struct WatchHistoryService {
    db: DatabaseConnection,
}

impl WatchHistoryService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<WatchHistoryDto>, ServiceError> {
        let rows = watch_history::Entity::find()
            .order_by_asc(watch_history::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(WatchHistoryDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<WatchHistoryDto>, ServiceError> {
        Ok(watch_history::Entity::find_by_id(id).one(&self.db).await?.map(WatchHistoryDto::from))
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<WatchHistoryDto>, ServiceError> {
        let rows = watch_history::Entity::find()
            .filter(watch_history::Column::UserId.eq(user_id))
            .order_by_asc(watch_history::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(WatchHistoryDto::from).collect())
    }

    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn create(&self, input: CreateWatchHistory) -> Result<WatchHistoryDto, ServiceError> {
        let target = WatchTarget::from_ids(input.movie_id, input.episode_id)?;
        let am = watch_history::ActiveModel {
            watched_at: Set(Utc::now()),
            completed: Set(input.completed),
            user_id: Set(input.user_id),
            movie_id: Set(target.movie_id()),
            episode_id: Set(target.episode_id()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, ?target, "watch history recorded");
        Ok(m.into())
    }

    /// Only the completed flag can change after the fact.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateWatchHistory) -> Result<WatchHistoryDto, ServiceError> {
        let found = watch_history::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("watch history"))?;
        let Some(completed) = input.completed else {
            return Ok(found.into());
        };
        let mut am: watch_history::ActiveModel = found.into();
        am.completed = Set(completed);
        let m = am.update(&self.db).await?;
        info!(id = m.id, completed, "watch history updated");
        Ok(m.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = watch_history::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "watch history entry deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_user_and_movie};

    #[tokio::test]
    async fn completed_defaults_to_true_and_can_flip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = WatchHistoryService::new(db);

        let input: CreateWatchHistory = serde_json::from_value(serde_json::json!({
            "userId": user_id,
            "movieId": movie_id,
        }))?;
        let wh = svc.create(input).await?;
        assert!(wh.completed);
        assert_eq!(wh.episode_id, None);

        let flipped = svc.update(wh.id, UpdateWatchHistory { completed: Some(false) }).await?;
        assert!(!flipped.completed);
        assert_eq!(flipped.watched_at, wh.watched_at);

        let same = svc.update(wh.id, UpdateWatchHistory::default()).await?;
        assert_eq!(same, flipped);
        Ok(())
    }

    #[tokio::test]
    async fn list_by_user_and_validation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = WatchHistoryService::new(db);

        let bad = svc.create(CreateWatchHistory { completed: true, user_id, movie_id: None, episode_id: None }).await;
        assert!(bad.as_ref().is_err_and(|e| e.is_validation()));

        svc.create(CreateWatchHistory { completed: false, user_id, movie_id: Some(movie_id), episode_id: None }).await?;
        assert_eq!(svc.list_by_user(user_id).await?.len(), 1);
        assert!(svc.list_by_user(user_id + 100).await?.is_empty());
        Ok(())
    }
}
