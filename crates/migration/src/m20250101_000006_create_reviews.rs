//! Create `reviews` table.
//!
//! A review targets either a movie or a series; both columns are nullable
//! and the service layer requires exactly one. Rating is checked in storage.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::Id))
                    .col(
                        integer(Reviews::Rating)
                            .not_null()
                            .check(Expr::col(Reviews::Rating).between(1, 10)),
                    )
                    .col(string_len_null(Reviews::Comment, 2000))
                    .col(timestamp_with_time_zone(Reviews::CreatedAt).not_null())
                    .col(integer(Reviews::UserId).not_null())
                    .col(integer_null(Reviews::MovieId))
                    .col(integer_null(Reviews::SeriesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_user")
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_movie")
                            .from(Reviews::Table, Reviews::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_series")
                            .from(Reviews::Table, Reviews::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reviews::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reviews { Table, Id, Rating, Comment, CreatedAt, UserId, MovieId, SeriesId }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Movies { Table, Id }

#[derive(DeriveIden)]
enum Series { Table, Id }
