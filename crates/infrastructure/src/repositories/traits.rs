use std::fmt;
use std::str::FromStr;

use edi_core::entities::edi_records::{Model as EdiRecord, NewEdiRecord};
use sea_orm::DbErr;

/// Which backend holds the records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    Database,
    InMemory,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Database => "database",
            StorageMode::InMemory => "in-memory",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" | "postgres" => Ok(StorageMode::Database),
            "memory" | "in-memory" | "in_memory" => Ok(StorageMode::InMemory),
            other => Err(format!("unknown storage mode '{other}'")),
        }
    }
}

/// Record storage.
///
/// Ids are assigned by the implementation, strictly increasing and never
/// reused. `list` returns records in ascending id order.
#[async_trait::async_trait]
pub trait RecordRepository: Send + Sync {
    fn mode(&self) -> StorageMode;

    async fn list(&self) -> Result<Vec<EdiRecord>, DbErr>;

    async fn insert(&self, record: NewEdiRecord) -> Result<EdiRecord, DbErr>;

    /// Round-trip to the backend; in-memory storage is always reachable.
    async fn ping(&self) -> Result<(), DbErr>;
}
