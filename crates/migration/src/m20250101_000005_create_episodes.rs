//! Create `episodes` table with FK to `seasons`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Episodes::Table)
                    .if_not_exists()
                    .col(pk_auto(Episodes::Id))
                    .col(integer(Episodes::EpisodeNumber).not_null())
                    .col(string_len(Episodes::Title, 200).not_null())
                    .col(string_len_null(Episodes::Description, 1000))
                    .col(integer_null(Episodes::DurationMinutes))
                    .col(timestamp_with_time_zone_null(Episodes::AirDate))
                    .col(integer(Episodes::SeasonId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_episodes_season")
                            .from(Episodes::Table, Episodes::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Episodes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Episodes { Table, Id, EpisodeNumber, Title, Description, DurationMinutes, AirDate, SeasonId }

#[derive(DeriveIden)]
enum Seasons { Table, Id }
