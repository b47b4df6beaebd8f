use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::{watchlist, WatchlistTarget};
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistDto {
    pub id: i32,
    pub added_at: DateTime<Utc>,
    pub user_id: i32,
    pub movie_id: Option<i32>,
    pub series_id: Option<i32>,
}

impl From<watchlist::Model> for WatchlistDto {
    fn from(m: watchlist::Model) -> Self {
        Self { id: m.id, added_at: m.added_at, user_id: m.user_id, movie_id: m.movie_id, series_id: m.series_id }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWatchlist {
    pub user_id: i32,
    #[serde(default)]
    pub movie_id: Option<i32>,
    #[serde(default)]
    pub series_id: Option<i32>,
}

/// Watchlist entries are added and removed, never edited.
#[derive(Clone)]
pub struct WatchlistService {
    db: DatabaseConnection,
}

impl WatchlistService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<WatchlistDto>, ServiceError> {
        let rows = watchlist::Entity::find().order_by_asc(watchlist::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(WatchlistDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<WatchlistDto>, ServiceError> {
        Ok(watchlist::Entity::find_by_id(id).one(&self.db).await?.map(WatchlistDto::from))
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<WatchlistDto>, ServiceError> {
        let rows = watchlist::Entity::find()
            .filter(watchlist::Column::UserId.eq(user_id))
            .order_by_asc(watchlist::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(WatchlistDto::from).collect())
    }

    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn create(&self, input: CreateWatchlist) -> Result<WatchlistDto, ServiceError> {
        let target = WatchlistTarget::from_ids(input.movie_id, input.series_id)?;
        let am = watchlist::ActiveModel {
            added_at: Set(Utc::now()),
            user_id: Set(input.user_id),
            movie_id: Set(target.movie_id()),
            series_id: Set(target.series_id()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, ?target, "watchlist entry added");
        Ok(m.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = watchlist::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "watchlist entry deleted");
        }
        Ok(removed)
    }
}
