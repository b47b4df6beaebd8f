use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One viewing of a movie or an episode by a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "watch_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub watched_at: DateTimeUtc,
    pub completed: bool,
    pub user_id: i32,
    pub movie_id: Option<i32>,
    pub episode_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::episode::Entity",
        from = "Column::EpisodeId",
        to = "super::episode::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Episode,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movie.def() }
}

impl Related<super::episode::Entity> for Entity {
    fn to() -> RelationDef { Relation::Episode.def() }
}

impl ActiveModelBehavior for ActiveModel {}
