use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "episodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub episode_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub air_date: Option<DateTimeUtc>,
    pub season_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(has_many = "super::watch_history::Entity")]
    WatchHistories,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef { Relation::Season.def() }
}

impl Related<super::watch_history::Entity> for Entity {
    fn to() -> RelationDef { Relation::WatchHistories.def() }
}

impl ActiveModelBehavior for ActiveModel {}
