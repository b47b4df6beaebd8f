use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A TV series. Owns its seasons; deleting it removes seasons, episodes
/// and every review/watchlist row pointing at it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::season::Entity")]
    Seasons,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::watchlist::Entity")]
    Watchlists,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef { Relation::Seasons.def() }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviews.def() }
}

impl Related<super::watchlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Watchlists.def() }
}

impl ActiveModelBehavior for ActiveModel {}
