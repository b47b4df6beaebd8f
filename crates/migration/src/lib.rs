//! Migrator registering one migration per table in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_movies;
mod m20250101_000003_create_series;
mod m20250101_000004_create_seasons;
mod m20250101_000005_create_episodes;
mod m20250101_000006_create_reviews;
mod m20250101_000007_create_watch_histories;
mod m20250101_000008_create_watchlists;
mod m20250101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_movies::Migration),
            Box::new(m20250101_000003_create_series::Migration),
            Box::new(m20250101_000004_create_seasons::Migration),
            Box::new(m20250101_000005_create_episodes::Migration),
            Box::new(m20250101_000006_create_reviews::Migration),
            Box::new(m20250101_000007_create_watch_histories::Migration),
            Box::new(m20250101_000008_create_watchlists::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000009_add_indexes::Migration),
        ]
    }
}
