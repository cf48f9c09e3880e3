use std::sync::Arc;

use infrastructure::database::{self, DatabaseConnection, DatabaseSettings};
use infrastructure::repositories::{
    InMemoryRecordRepository, PostgresRecordRepository, RecordRepository, StorageMode,
};
use migration::{Migrator, MigratorTrait};

use crate::config::Config;

/// Builds the storage backend once at startup.
///
/// Missing or unreachable database configuration is fatal unless
/// `allow_in_memory_fallback` is set.
pub async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn RecordRepository>> {
    match (config.storage_mode, &config.database) {
        (StorageMode::InMemory, _) => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(InMemoryRecordRepository::new()))
        }
        (StorageMode::Database, None) => {
            tracing::warn!("Database not configured, falling back to in-memory storage");
            Ok(Arc::new(InMemoryRecordRepository::new()))
        }
        (StorageMode::Database, Some(settings)) => {
            tracing::info!("Database configured for: {}", settings.display_target());
            match connect(settings, config.run_migrations).await {
                Ok(db) => Ok(Arc::new(PostgresRecordRepository::new(db))),
                Err(e) if config.allow_in_memory_fallback => {
                    tracing::warn!(error = %e, "Database unreachable, falling back to in-memory storage");
                    Ok(Arc::new(InMemoryRecordRepository::new()))
                }
                Err(e) => Err(e.context("Failed to initialize database")),
            }
        }
    }
}

async fn connect(settings: &DatabaseSettings, run_migrations: bool) -> anyhow::Result<DatabaseConnection> {
    let db = database::init_database(settings).await?;
    if run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database tables created/verified successfully");
    }
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure::database::PgSslMode;
    use std::time::Duration;

    fn config(storage_mode: StorageMode, database: Option<DatabaseSettings>, fallback: bool) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            storage_mode,
            allow_in_memory_fallback: fallback,
            run_migrations: false,
            database,
        }
    }

    // Nothing listens on port 1, so connecting fails fast.
    fn unreachable_db() -> DatabaseSettings {
        DatabaseSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "edi".to_string(),
            password: "edi".to_string(),
            name: "edi".to_string(),
            ssl_mode: PgSslMode::Disable,
            connect_timeout: Duration::from_secs(1),
            command_timeout: Duration::from_secs(1),
            max_connections: 1,
        }
    }

    #[actix_web::test]
    async fn test_memory_mode_builds_memory_backend() {
        let repo = build_repository(&config(StorageMode::InMemory, None, false))
            .await
            .unwrap();
        assert_eq!(repo.mode(), StorageMode::InMemory);
    }

    #[actix_web::test]
    async fn test_unreachable_database_fails_without_fallback() {
        let result = build_repository(&config(StorageMode::Database, Some(unreachable_db()), false)).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_unreachable_database_falls_back_when_allowed() {
        let repo = build_repository(&config(StorageMode::Database, Some(unreachable_db()), true))
            .await
            .unwrap();
        assert_eq!(repo.mode(), StorageMode::InMemory);
    }
}
