//! Create `watchlists` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Watchlists::Table)
                    .if_not_exists()
                    .col(pk_auto(Watchlists::Id))
                    .col(timestamp_with_time_zone(Watchlists::AddedAt).not_null())
                    .col(integer(Watchlists::UserId).not_null())
                    .col(integer_null(Watchlists::MovieId))
                    .col(integer_null(Watchlists::SeriesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watchlists_user")
                            .from(Watchlists::Table, Watchlists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watchlists_movie")
                            .from(Watchlists::Table, Watchlists::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watchlists_series")
                            .from(Watchlists::Table, Watchlists::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Watchlists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Watchlists { Table, Id, AddedAt, UserId, MovieId, SeriesId }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Movies { Table, Id }

#[derive(DeriveIden)]
enum Series { Table, Id }
