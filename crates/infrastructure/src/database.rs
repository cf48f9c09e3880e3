use std::time::Duration;

pub use sea_orm::DatabaseConnection;
use sea_orm::SqlxPostgresConnector;
pub use sqlx::postgres::PgSslMode;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Connection parameters for the Postgres backend.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub connect_timeout: Duration,
    /// Applied server-side as `statement_timeout`.
    pub command_timeout: Duration,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// `user@host:port/name`, safe to log.
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }

    fn connect_options(&self) -> PgConnectOptions {
        let statement_timeout = self.command_timeout.as_millis().to_string();

        // The password is handed over as-is; no URL quoting needed.
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
            .options([("statement_timeout", statement_timeout)])
    }
}

pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<DatabaseConnection> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .connect_with(settings.connect_options())
        .await?;

    let db = SqlxPostgresConnector::from_sqlx_postgres_pool(pool);
    tracing::info!(target_db = %settings.display_target(), "Database connected successfully");
    Ok(db)
}
