//! Create `watch_histories` table (movie or episode per row).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchHistories::Table)
                    .if_not_exists()
                    .col(pk_auto(WatchHistories::Id))
                    .col(timestamp_with_time_zone(WatchHistories::WatchedAt).not_null())
                    .col(boolean(WatchHistories::Completed).not_null().default(true))
                    .col(integer(WatchHistories::UserId).not_null())
                    .col(integer_null(WatchHistories::MovieId))
                    .col(integer_null(WatchHistories::EpisodeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_histories_user")
                            .from(WatchHistories::Table, WatchHistories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_histories_movie")
                            .from(WatchHistories::Table, WatchHistories::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_histories_episode")
                            .from(WatchHistories::Table, WatchHistories::EpisodeId)
                            .to(Episodes::Table, Episodes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WatchHistories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WatchHistories { Table, Id, WatchedAt, Completed, UserId, MovieId, EpisodeId }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Movies { Table, Id }

#[derive(DeriveIden)]
enum Episodes { Table, Id }
