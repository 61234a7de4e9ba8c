//! Connection lifecycle: connect, migrate, close.

use std::time::Duration;

use abacus_bootstrap::DatabaseConfig;
use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::migrations::Migrator;

// An in-memory SQLite database lives exactly as long as its single connection
const MEMORY_MAX_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Build pool options from config. In-memory databases are pinned to one
/// connection that is never recycled.
#[must_use]
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(false);

    if cfg.is_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_MAX_LIFETIME);
    } else {
        opts.max_connections(cfg.max_conns);
        if let Some(min) = cfg.min_conns {
            opts.min_connections(min);
        }
    }
    opts
}

/// Open the pool and bring the schema up to date.
///
/// # Errors
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg))
        .await
        .with_context(|| format!("failed to connect to {}", cfg.redacted_dsn()))?;

    Migrator::up(&db, None)
        .await
        .context("failed to run calculator migrations")?;

    info!(dsn = %cfg.redacted_dsn(), "database ready");
    Ok(db)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use abacus_bootstrap::MEMORY_DSN;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            dsn: MEMORY_DSN.to_owned(),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn memory_pool_is_pinned_to_one_connection() {
        let opts = connect_options(&memory_config());
        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_min_connections(), Some(1));
    }

    #[test]
    fn file_pool_uses_configured_sizes() {
        let cfg = DatabaseConfig {
            dsn: "sqlite://history.db?mode=rwc".to_owned(),
            max_conns: 4,
            min_conns: Some(2),
            ..DatabaseConfig::default()
        };
        let opts = connect_options(&cfg);
        assert_eq!(opts.get_max_connections(), Some(4));
        assert_eq!(opts.get_min_connections(), Some(2));
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = connect_and_migrate(&memory_config()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db.close().await.unwrap();
    }
}
