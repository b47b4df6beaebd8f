//! Secondary indexes on foreign-key columns. Registered after every table.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seasons: lookup by series
        manager
            .create_index(
                Index::create()
                    .name("idx_seasons_series")
                    .table(Seasons::Table)
                    .col(Seasons::SeriesId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        // Episodes: lookup by season
        manager
            .create_index(
                Index::create()
                    .name("idx_episodes_season")
                    .table(Episodes::Table)
                    .col(Episodes::SeasonId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        // Reviews: owner and both targets
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_user")
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_movie")
                    .table(Reviews::Table)
                    .col(Reviews::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_series")
                    .table(Reviews::Table)
                    .col(Reviews::SeriesId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        // WatchHistories: owner and both targets
        manager
            .create_index(
                Index::create()
                    .name("idx_watch_histories_user")
                    .table(WatchHistories::Table)
                    .col(WatchHistories::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_watch_histories_movie")
                    .table(WatchHistories::Table)
                    .col(WatchHistories::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_watch_histories_episode")
                    .table(WatchHistories::Table)
                    .col(WatchHistories::EpisodeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        // Watchlists: owner and both targets
        manager
            .create_index(
                Index::create()
                    .name("idx_watchlists_user")
                    .table(Watchlists::Table)
                    .col(Watchlists::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_watchlists_movie")
                    .table(Watchlists::Table)
                    .col(Watchlists::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_watchlists_series")
                    .table(Watchlists::Table)
                    .col(Watchlists::SeriesId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_seasons_series").table(Seasons::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_episodes_season").table(Episodes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_user").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_movie").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_series").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watch_histories_user").table(WatchHistories::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watch_histories_movie").table(WatchHistories::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watch_histories_episode").table(WatchHistories::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watchlists_user").table(Watchlists::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watchlists_movie").table(Watchlists::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_watchlists_series").table(Watchlists::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Seasons { Table, SeriesId }

#[derive(DeriveIden)]
enum Episodes { Table, SeasonId }

#[derive(DeriveIden)]
enum Reviews { Table, UserId, MovieId, SeriesId }

#[derive(DeriveIden)]
enum WatchHistories { Table, UserId, MovieId, EpisodeId }

#[derive(DeriveIden)]
enum Watchlists { Table, UserId, MovieId, SeriesId }
