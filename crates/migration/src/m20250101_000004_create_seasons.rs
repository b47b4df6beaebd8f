//! Create `seasons` table with FK to `series`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(pk_auto(Seasons::Id))
                    .col(integer(Seasons::SeasonNumber).not_null())
                    .col(string_len_null(Seasons::Title, 200))
                    .col(integer_null(Seasons::ReleaseYear))
                    .col(integer(Seasons::SeriesId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasons_series")
                            .from(Seasons::Table, Seasons::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seasons::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Seasons { Table, Id, SeasonNumber, Title, ReleaseYear, SeriesId }

#[derive(DeriveIden)]
enum Series { Table, Id }
