#![cfg(test)]
use sea_orm::DatabaseConnection;

use crate::movie_service::{CreateMovie, MovieService};
use crate::user_service::{CreateUser, UserService};

/// Fresh migrated in-memory database; every test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}

/// One user and one movie, returned as `(user_id, movie_id)`.
pub async fn seed_user_and_movie(db: &DatabaseConnection) -> Result<(i32, i32), anyhow::Error> {
    let user = UserService::new(db.clone())
        .create(CreateUser { username: "viewer".into(), email: "viewer@example.com".into() })
        .await?;
    let movie = MovieService::new(db.clone())
        .create(CreateMovie { title: "Dune".into(), release_year: Some(2021), ..Default::default() })
        .await?;
    Ok((user.id, movie.id))
}
