//! Create `movies` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_len(Movies::Title, 200).not_null())
                    .col(string_len_null(Movies::Description, 1000))
                    .col(integer_null(Movies::ReleaseYear))
                    .col(string_len_null(Movies::Genre, 100))
                    .col(integer_null(Movies::DurationMinutes))
                    .col(string_len_null(Movies::PosterUrl, 500))
                    .col(timestamp_with_time_zone(Movies::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Description,
    ReleaseYear,
    Genre,
    DurationMinutes,
    PosterUrl,
    CreatedAt,
}
