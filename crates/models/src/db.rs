use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Idle and lifetime limit for the single in-memory connection. The pool
/// cannot drop them entirely, so they are set past any realistic uptime.
const IN_MEMORY_CONNECTION_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Build pool options from configuration.
///
/// In-memory SQLite databases live per connection, so the pool is pinned to
/// one connection that is never reaped. A recycled connection would be a
/// fresh, empty database.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_TTL)
            .max_lifetime(IN_MEMORY_CONNECTION_TTL);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

/// Open the configured backend. SQLite connections come up with foreign
/// keys enforced, which the cascade rules rely on.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let backend = if cfg.use_postgres { "postgres" } else { "sqlite" };
    let db = Database::connect(connect_options(cfg)).await?;
    info!(backend, max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// Fresh, migrated in-memory SQLite database.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = Database::connect(connect_options(&cfg)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_connection_is_never_recycled() {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_min_connections(), Some(1));
        let year = Duration::from_secs(365 * 24 * 60 * 60);
        assert!(opt.get_idle_timeout().is_some_and(|d| d > year));
        assert!(opt.get_max_lifetime().is_some_and(|d| d > year));
    }

    #[test]
    fn file_backed_pool_uses_configured_limits() {
        let cfg = DatabaseConfig {
            url: configs::DEFAULT_SQLITE_URL.into(),
            idle_timeout_secs: 60,
            max_lifetime_secs: 120,
            ..Default::default()
        };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(cfg.max_connections));
        assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(60)));
        assert_eq!(opt.get_max_lifetime(), Some(Duration::from_secs(120)));
    }

    #[tokio::test]
    async fn in_memory_database_is_migrated() -> anyhow::Result<()> {
        use sea_orm::EntityTrait;

        let db = connect_memory().await?;
        assert!(crate::movie::Entity::find().all(&db).await?.is_empty());
        Ok(())
    }
}
