use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A registered viewer. Username and email are unique in storage.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::watch_history::Entity")]
    WatchHistories,
    #[sea_orm(has_many = "super::watchlist::Entity")]
    Watchlists,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviews.def() }
}

impl Related<super::watch_history::Entity> for Entity {
    fn to() -> RelationDef { Relation::WatchHistories.def() }
}

impl Related<super::watchlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Watchlists.def() }
}

impl ActiveModelBehavior for ActiveModel {}
