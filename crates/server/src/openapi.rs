use utoipa::OpenApi;
use utoipa::ToSchema;

use service::{
    episode_service::{CreateEpisode, EpisodeDto, UpdateEpisode},
    movie_service::{CreateMovie, MovieDto, UpdateMovie},
    review_service::{CreateReview, ReviewDto, UpdateReview},
    season_service::{CreateSeason, SeasonDto, UpdateSeason},
    series_service::{CreateSeries, SeriesDto, UpdateSeries},
    user_service::{CreateUser, UpdateUser, UserDto},
    watch_history_service::{CreateWatchHistory, UpdateWatchHistory, WatchHistoryDto},
    watchlist_service::{CreateWatchlist, WatchlistDto},
};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::movies::list,
        crate::routes::movies::get,
        crate::routes::movies::create,
        crate::routes::movies::update,
        crate::routes::movies::delete,
        crate::routes::series::list,
        crate::routes::series::get,
        crate::routes::series::create,
        crate::routes::series::update,
        crate::routes::series::delete,
        crate::routes::seasons::list,
        crate::routes::seasons::get,
        crate::routes::seasons::list_by_series,
        crate::routes::seasons::create,
        crate::routes::seasons::update,
        crate::routes::seasons::delete,
        crate::routes::episodes::list,
        crate::routes::episodes::get,
        crate::routes::episodes::list_by_season,
        crate::routes::episodes::create,
        crate::routes::episodes::update,
        crate::routes::episodes::delete,
        crate::routes::reviews::list,
        crate::routes::reviews::get,
        crate::routes::reviews::create,
        crate::routes::reviews::update,
        crate::routes::reviews::delete,
        crate::routes::watch_history::list,
        crate::routes::watch_history::get,
        crate::routes::watch_history::list_by_user,
        crate::routes::watch_history::create,
        crate::routes::watch_history::update,
        crate::routes::watch_history::delete,
        crate::routes::watchlist::list,
        crate::routes::watchlist::get,
        crate::routes::watchlist::list_by_user,
        crate::routes::watchlist::create,
        crate::routes::watchlist::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDto, CreateUser, UpdateUser,
            MovieDto, CreateMovie, UpdateMovie,
            SeriesDto, CreateSeries, UpdateSeries,
            SeasonDto, CreateSeason, UpdateSeason,
            EpisodeDto, CreateEpisode, UpdateEpisode,
            ReviewDto, CreateReview, UpdateReview,
            WatchHistoryDto, CreateWatchHistory, UpdateWatchHistory,
            WatchlistDto, CreateWatchlist,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "movies"),
        (name = "series"),
        (name = "seasons"),
        (name = "episodes"),
        (name = "reviews"),
        (name = "watch history"),
        (name = "watchlist")
    )
)]
pub struct ApiDoc;
