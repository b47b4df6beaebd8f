use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::{review, ReviewTarget};
use crate::{errors::ServiceError, patch::Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub movie_id: Option<i32>,
    pub series_id: Option<i32>,
}

impl From<review::Model> for ReviewDto {
    fn from(m: review::Model) -> Self {
        Self {
            id: m.id,
            rating: m.rating,
            comment: m.comment,
            created_at: m.created_at,
            user_id: m.user_id,
            movie_id: m.movie_id,
            series_id: m.series_id,
        }
    }
}

/// Exactly one of `movieId` / `seriesId` must be given.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub user_id: i32,
    #[serde(default)]
    pub movie_id: Option<i32>,
    #[serde(default)]
    pub series_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub comment: Patch<String>,
}

#[derive(Clone)]
pub struct ReviewService {
    db: DatabaseConnection,
}

impl ReviewService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<ReviewDto>, ServiceError> {
        let rows = review::Entity::find().order_by_asc(review::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(ReviewDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<ReviewDto>, ServiceError> {
        Ok(review::Entity::find_by_id(id).one(&self.db).await?.map(ReviewDto::from))
    }

    /// Create a review. The target is validated before touching storage;
    /// the rating range is enforced by a column check.
    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn create(&self, input: CreateReview) -> Result<ReviewDto, ServiceError> {
        let target = ReviewTarget::from_ids(input.movie_id, input.series_id)?;
        let am = review::ActiveModel {
            rating: Set(input.rating),
            comment: Set(input.comment),
            created_at: Set(Utc::now()),
            user_id: Set(input.user_id),
            movie_id: Set(target.movie_id()),
            series_id: Set(target.series_id()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, ?target, "review created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateReview) -> Result<ReviewDto, ServiceError> {
        let found = review::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("review"))?;
        let mut am: review::ActiveModel = found.clone().into();
        if let Some(v) = input.rating { am.rating = Set(v); }
        if let Some(v) = input.comment.into_update() { am.comment = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "review updated");
        Ok(m.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = review::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "review deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_user_and_movie};

    fn review_of(user_id: i32, movie_id: Option<i32>, series_id: Option<i32>) -> CreateReview {
        CreateReview { rating: 8, comment: None, user_id, movie_id, series_id }
    }

    #[tokio::test]
    async fn target_must_be_exactly_one() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = ReviewService::new(db);

        let neither = svc.create(review_of(user_id, None, None)).await;
        assert!(neither.as_ref().is_err_and(|e| e.is_validation()));
        let both = svc.create(review_of(user_id, Some(movie_id), Some(1))).await;
        assert!(both.as_ref().is_err_and(|e| e.is_validation()));
        assert!(svc.list().await?.is_empty());

        let ok = svc.create(review_of(user_id, Some(movie_id), None)).await?;
        assert_eq!(ok.movie_id, Some(movie_id));
        assert_eq!(ok.series_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn rating_check_and_comment_clear() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = ReviewService::new(db);

        let bad = svc.create(CreateReview { rating: 11, ..review_of(user_id, Some(movie_id), None) }).await;
        assert!(matches!(bad, Err(ServiceError::Db(_))));

        let r = svc
            .create(CreateReview { comment: Some("slow start".into()), ..review_of(user_id, Some(movie_id), None) })
            .await?;
        let updated = svc.update(r.id, UpdateReview { rating: Some(10), comment: Patch::Clear }).await?;
        assert_eq!(updated.rating, 10);
        assert!(updated.comment.is_none());
        assert_eq!(updated.created_at, r.created_at);
        assert_eq!(updated.movie_id, r.movie_id);

        let out_of_range = svc.update(r.id, UpdateReview { rating: Some(0), ..Default::default() }).await;
        assert!(matches!(out_of_range, Err(ServiceError::Db(_))));
        Ok(())
    }
}
