use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use infrastructure::database::{DatabaseSettings, PgSslMode};
use infrastructure::repositories::StorageMode;

const REQUIRED_DB_VARS: [&str; 4] = ["DB_USER", "DB_PASSWORD", "DB_HOST", "DB_NAME"];

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub storage_mode: StorageMode,
    pub allow_in_memory_fallback: bool,
    pub run_migrations: bool,
    /// `None` in memory mode, or when database variables are missing and
    /// fallback is allowed.
    pub database: Option<DatabaseSettings>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let storage_mode = match var("STORAGE_MODE") {
            Some(v) => StorageMode::from_str(&v).map_err(anyhow::Error::msg)?,
            None => StorageMode::Database,
        };
        let allow_in_memory_fallback =
            parse_bool("ALLOW_IN_MEMORY_FALLBACK", var("ALLOW_IN_MEMORY_FALLBACK"), false)?;

        let database = match storage_mode {
            StorageMode::InMemory => None,
            StorageMode::Database => {
                let missing: Vec<&str> = REQUIRED_DB_VARS
                    .iter()
                    .copied()
                    .filter(|name| var(*name).is_none())
                    .collect();

                if missing.is_empty() {
                    Some(DatabaseSettings {
                        host: var("DB_HOST").unwrap_or_default(),
                        port: parse_or("DB_PORT", var("DB_PORT"), 5432)?,
                        user: var("DB_USER").unwrap_or_default(),
                        password: var("DB_PASSWORD").unwrap_or_default(),
                        name: var("DB_NAME").unwrap_or_default(),
                        ssl_mode: parse_or("DB_SSLMODE", var("DB_SSLMODE"), PgSslMode::Prefer)?,
                        connect_timeout: Duration::from_secs(parse_or(
                            "DB_CONNECT_TIMEOUT",
                            var("DB_CONNECT_TIMEOUT"),
                            10,
                        )?),
                        command_timeout: Duration::from_secs(parse_or(
                            "DB_COMMAND_TIMEOUT",
                            var("DB_COMMAND_TIMEOUT"),
                            30,
                        )?),
                        max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 10)?,
                    })
                } else if allow_in_memory_fallback {
                    tracing::warn!(missing = %missing.join(", "), "Database configuration incomplete");
                    None
                } else {
                    anyhow::bail!("Missing required environment variables: {}", missing.join(", "));
                }
            }
        };

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_or("SERVER_PORT", var("SERVER_PORT"), 5000)?,
            storage_mode,
            allow_in_memory_fallback,
            run_migrations: parse_bool("RUN_MIGRATIONS", var("RUN_MIGRATIONS"), true)?,
            database,
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: '{}'", name, v)),
        None => Ok(default),
    }
}

fn parse_bool(name: &str, value: Option<String>, default: bool) -> anyhow::Result<bool> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("Invalid value for {}: '{}'", name, v),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    const FULL_DB: [(&str, &str); 4] = [
        ("DB_USER", "edi"),
        ("DB_PASSWORD", "s3cr&t"),
        ("DB_HOST", "localhost"),
        ("DB_NAME", "edi"),
    ];

    #[test]
    fn test_database_mode_with_defaults() {
        let config = config_from(&FULL_DB).unwrap();

        assert_eq!(config.storage_mode, StorageMode::Database);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 5000);
        assert!(config.run_migrations);

        let db = config.database.unwrap();
        assert_eq!(db.port, 5432);
        assert_eq!(db.password, "s3cr&t");
        assert!(matches!(db.ssl_mode, PgSslMode::Prefer));
        assert_eq!(db.connect_timeout, Duration::from_secs(10));
        assert_eq!(db.command_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_database_vars_fail_fast() {
        let err = config_from(&[("DB_HOST", "localhost")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: DB_USER, DB_PASSWORD, DB_NAME"
        );
    }

    #[test]
    fn test_missing_database_vars_with_fallback() {
        let config = config_from(&[("ALLOW_IN_MEMORY_FALLBACK", "true")]).unwrap();
        assert_eq!(config.storage_mode, StorageMode::Database);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_memory_mode_needs_no_database_vars() {
        let config = config_from(&[("STORAGE_MODE", "memory"), ("SERVER_PORT", "8080")]).unwrap();
        assert_eq!(config.storage_mode, StorageMode::InMemory);
        assert_eq!(config.server_port, 8080);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut vars = FULL_DB.to_vec();
        vars.push(("DB_PORT", "not-a-port"));
        assert!(config_from(&vars).is_err());

        assert!(config_from(&[("STORAGE_MODE", "redis")]).is_err());
        assert!(config_from(&[("STORAGE_MODE", "memory"), ("RUN_MIGRATIONS", "maybe")]).is_err());
    }

    #[test]
    fn test_ssl_mode_and_timeouts() {
        let mut vars = FULL_DB.to_vec();
        vars.extend([
            ("DB_SSLMODE", "require"),
            ("DB_CONNECT_TIMEOUT", "3"),
            ("DB_COMMAND_TIMEOUT", "60"),
        ]);
        let db = config_from(&vars).unwrap().database.unwrap();

        assert!(matches!(db.ssl_mode, PgSslMode::Require));
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
        assert_eq!(db.command_timeout, Duration::from_secs(60));
    }
}
