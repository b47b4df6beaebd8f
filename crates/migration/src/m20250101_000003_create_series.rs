//! Create `series` table.
//!
//! Same shape as `movies` without a duration; seasons hang off it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(pk_auto(Series::Id))
                    .col(string_len(Series::Title, 200).not_null())
                    .col(string_len_null(Series::Description, 1000))
                    .col(integer_null(Series::ReleaseYear))
                    .col(string_len_null(Series::Genre, 100))
                    .col(string_len_null(Series::PosterUrl, 500))
                    .col(timestamp_with_time_zone(Series::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Series::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Series { Table, Id, Title, Description, ReleaseYear, Genre, PosterUrl, CreatedAt }
