//! Service layer providing the CRUD operations behind every endpoint.
//! - One service per entity, each holding a clone of the shared pool.
//! - Maps rows to camelCase DTOs and applies partial updates.
//! - Validates polymorphic references before anything reaches storage.

pub mod errors;
pub mod patch;
pub mod user_service;
pub mod movie_service;
pub mod series_service;
pub mod season_service;
pub mod episode_service;
pub mod review_service;
pub mod watch_history_service;
pub mod watchlist_service;
#[cfg(test)]
pub mod test_support;

use sea_orm::DatabaseConnection;

pub use errors::ServiceError;
pub use patch::Patch;
pub use episode_service::EpisodeService;
pub use movie_service::MovieService;
pub use review_service::ReviewService;
pub use season_service::SeasonService;
pub use series_service::SeriesService;
pub use user_service::UserService;
pub use watch_history_service::WatchHistoryService;
pub use watchlist_service::WatchlistService;

/// All entity services built from one connection pool.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub movies: MovieService,
    pub series: SeriesService,
    pub seasons: SeasonService,
    pub episodes: EpisodeService,
    pub reviews: ReviewService,
    pub watch_history: WatchHistoryService,
    pub watchlist: WatchlistService,
}

impl Services {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserService::new(db.clone()),
            movies: MovieService::new(db.clone()),
            series: SeriesService::new(db.clone()),
            seasons: SeasonService::new(db.clone()),
            episodes: EpisodeService::new(db.clone()),
            reviews: ReviewService::new(db.clone()),
            watch_history: WatchHistoryService::new(db.clone()),
            watchlist: WatchlistService::new(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode_service::CreateEpisode;
    use crate::movie_service::CreateMovie;
    use crate::review_service::CreateReview;
    use crate::season_service::CreateSeason;
    use crate::series_service::CreateSeries;
    use crate::test_support::{get_db, seed_user_and_movie};
    use crate::watch_history_service::CreateWatchHistory;
    use crate::watchlist_service::CreateWatchlist;

    fn episode(season_id: i32, episode_number: i32) -> CreateEpisode {
        CreateEpisode {
            episode_number,
            title: format!("Episode {episode_number}"),
            description: None,
            duration_minutes: None,
            air_date: None,
            season_id,
        }
    }

    #[tokio::test]
    async fn deleting_series_cascades_everywhere() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = Services::new(db);

        let show = svc.series.create(CreateSeries { title: "Shogun".into(), ..Default::default() }).await?;
        let mut season_ids = vec![];
        let mut episode_ids = vec![];
        for n in 1..=2 {
            let season = svc
                .seasons
                .create(CreateSeason { season_number: n, title: None, release_year: None, series_id: show.id })
                .await?;
            season_ids.push(season.id);
            for e in 1..=2 {
                let ep = svc
                    .episodes
                    .create(CreateEpisode {
                        episode_number: e,
                        title: format!("S{n}E{e}"),
                        description: None,
                        duration_minutes: None,
                        air_date: None,
                        season_id: season.id,
                    })
                    .await?;
                episode_ids.push(ep.id);
                svc.watch_history
                    .create(CreateWatchHistory { completed: true, user_id, movie_id: None, episode_id: Some(ep.id) })
                    .await?;
            }
        }
        svc.reviews
            .create(CreateReview { rating: 9, comment: None, user_id, movie_id: None, series_id: Some(show.id) })
            .await?;
        svc.watchlist.create(CreateWatchlist { user_id, movie_id: None, series_id: Some(show.id) }).await?;
        let movie_entry = svc.watchlist.create(CreateWatchlist { user_id, movie_id: Some(movie_id), series_id: None }).await?;

        assert!(svc.series.delete(show.id).await?);

        assert!(svc.series.get(show.id).await?.is_none());
        for id in season_ids {
            assert!(svc.seasons.get(id).await?.is_none());
        }
        for id in episode_ids {
            assert!(svc.episodes.get(id).await?.is_none());
        }
        assert!(svc.reviews.list().await?.is_empty());
        assert!(svc.watch_history.list_by_user(user_id).await?.is_empty());
        assert_eq!(svc.watchlist.list_by_user(user_id).await?, vec![movie_entry]);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_user_removes_their_activity() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = Services::new(db);

        svc.reviews
            .create(CreateReview { rating: 6, comment: None, user_id, movie_id: Some(movie_id), series_id: None })
            .await?;
        svc.watch_history
            .create(CreateWatchHistory { completed: false, user_id, movie_id: Some(movie_id), episode_id: None })
            .await?;
        svc.watchlist.create(CreateWatchlist { user_id, movie_id: Some(movie_id), series_id: None }).await?;

        assert!(svc.users.delete(user_id).await?);
        assert!(svc.reviews.list().await?.is_empty());
        assert!(svc.watch_history.list().await?.is_empty());
        assert!(svc.watchlist.list().await?.is_empty());
        assert!(svc.movies.get(movie_id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_movie_removes_reviews_history_and_watchlist() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = Services::new(db);
        let other = svc.movies.create(CreateMovie { title: "Heat".into(), ..Default::default() }).await?;

        svc.reviews
            .create(CreateReview { rating: 8, comment: None, user_id, movie_id: Some(movie_id), series_id: None })
            .await?;
        svc.watch_history
            .create(CreateWatchHistory { completed: true, user_id, movie_id: Some(movie_id), episode_id: None })
            .await?;
        svc.watchlist.create(CreateWatchlist { user_id, movie_id: Some(movie_id), series_id: None }).await?;
        let kept = svc.watchlist.create(CreateWatchlist { user_id, movie_id: Some(other.id), series_id: None }).await?;

        assert!(svc.movies.delete(movie_id).await?);

        assert!(svc.movies.get(movie_id).await?.is_none());
        assert!(svc.reviews.list().await?.is_empty());
        assert!(svc.watch_history.list().await?.is_empty());
        assert_eq!(svc.watchlist.list().await?, vec![kept]);
        assert!(svc.users.get(user_id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_season_removes_episodes_and_their_history() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, _) = seed_user_and_movie(&db).await?;
        let svc = Services::new(db);

        let show = svc.series.create(CreateSeries { title: "Severance".into(), ..Default::default() }).await?;
        let first = svc
            .seasons
            .create(CreateSeason { season_number: 1, title: None, release_year: None, series_id: show.id })
            .await?;
        let second = svc
            .seasons
            .create(CreateSeason { season_number: 2, title: None, release_year: None, series_id: show.id })
            .await?;
        let gone = svc.episodes.create(episode(first.id, 1)).await?;
        let kept = svc.episodes.create(episode(second.id, 1)).await?;
        svc.watch_history
            .create(CreateWatchHistory { completed: true, user_id, movie_id: None, episode_id: Some(gone.id) })
            .await?;
        let kept_view = svc
            .watch_history
            .create(CreateWatchHistory { completed: false, user_id, movie_id: None, episode_id: Some(kept.id) })
            .await?;

        assert!(svc.seasons.delete(first.id).await?);

        assert!(svc.episodes.get(gone.id).await?.is_none());
        assert!(svc.episodes.list_by_season(first.id).await?.is_empty());
        assert_eq!(svc.episodes.list_by_season(second.id).await?, vec![kept]);
        assert_eq!(svc.watch_history.list_by_user(user_id).await?, vec![kept_view]);
        assert!(svc.series.get(show.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_episode_removes_its_history() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, movie_id) = seed_user_and_movie(&db).await?;
        let svc = Services::new(db);

        let show = svc.series.create(CreateSeries { title: "Andor".into(), ..Default::default() }).await?;
        let season = svc
            .seasons
            .create(CreateSeason { season_number: 1, title: None, release_year: None, series_id: show.id })
            .await?;
        let ep = svc.episodes.create(episode(season.id, 1)).await?;
        svc.watch_history
            .create(CreateWatchHistory { completed: true, user_id, movie_id: None, episode_id: Some(ep.id) })
            .await?;
        let movie_view = svc
            .watch_history
            .create(CreateWatchHistory { completed: true, user_id, movie_id: Some(movie_id), episode_id: None })
            .await?;

        assert!(svc.episodes.delete(ep.id).await?);
        assert!(!svc.episodes.delete(ep.id).await?);

        assert_eq!(svc.watch_history.list().await?, vec![movie_view]);
        assert!(svc.seasons.get(season.id).await?.is_some());
        Ok(())
    }
}
