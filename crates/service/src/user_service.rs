use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use models::user;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserDto {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, username: m.username, email: m.email, created_at: m.created_at }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<UserDto>, ServiceError> {
        let rows = user::Entity::find().order_by_asc(user::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(UserDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<UserDto>, ServiceError> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?.map(UserDto::from))
    }

    /// Create a user. Duplicate username or email fails in storage.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: CreateUser) -> Result<UserDto, ServiceError> {
        let am = user::ActiveModel {
            username: Set(input.username),
            email: Set(input.email),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await?;
        info!(id = m.id, "user created");
        Ok(m.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateUser) -> Result<UserDto, ServiceError> {
        let found = user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        let mut am: user::ActiveModel = found.clone().into();
        if let Some(v) = input.username { am.username = Set(v); }
        if let Some(v) = input.email { am.email = Set(v); }
        if !am.is_changed() {
            return Ok(found.into());
        }
        let m = am.update(&self.db).await?;
        info!(id = m.id, "user updated");
        Ok(m.into())
    }

    /// Delete a user together with their reviews, history and watchlist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "user deleted");
        }
        Ok(removed)
    }
}
