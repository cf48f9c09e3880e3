use edi_core::entities::edi_records::Model as EdiRecord;
use infrastructure::repositories::{RecordRepository, StorageMode};
use serde_json::Value;

use super::dtos::{
    CreateRecordResponse, HealthResponse, ServiceStatusResponse, RECORD_ADDED_MESSAGE,
    SERVICE_RUNNING_MESSAGE,
};
use super::validation::parse_new_record;
use crate::AppResult;

pub struct ListRecordsUseCase;

impl ListRecordsUseCase {
    pub async fn execute(repo: &dyn RecordRepository) -> AppResult<Vec<EdiRecord>> {
        let records = repo.list().await?;
        tracing::debug!(count = records.len(), "Listed records");
        Ok(records)
    }
}

pub struct InsertRecordUseCase;

impl InsertRecordUseCase {
    pub async fn execute(
        repo: &dyn RecordRepository,
        payload: Option<Value>,
    ) -> AppResult<CreateRecordResponse> {
        let new_record = parse_new_record(payload)?;
        let record = repo.insert(new_record).await?;
        tracing::info!(record_id = record.id, client_code = %record.client_code, "Record added");

        Ok(CreateRecordResponse {
            message: RECORD_ADDED_MESSAGE.to_string(),
            record,
        })
    }
}

pub struct HealthCheckUseCase;

impl HealthCheckUseCase {
    /// Never fails; an unreachable backend is reported in the response.
    pub async fn execute(repo: &dyn RecordRepository) -> HealthResponse {
        match (repo.mode(), repo.ping().await) {
            (StorageMode::InMemory, _) => HealthResponse {
                status: "healthy".to_string(),
                database: "in-memory".to_string(),
                error: None,
            },
            (StorageMode::Database, Ok(())) => HealthResponse {
                status: "healthy".to_string(),
                database: "connected".to_string(),
                error: None,
            },
            (StorageMode::Database, Err(e)) => {
                tracing::warn!(error = %e, "Health check failed");
                HealthResponse {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

pub struct ServiceStatusUseCase;

impl ServiceStatusUseCase {
    pub async fn execute(repo: &dyn RecordRepository) -> ServiceStatusResponse {
        let mode = repo.mode();
        let database_connected = match mode {
            StorageMode::Database => repo.ping().await.is_ok(),
            StorageMode::InMemory => false,
        };

        ServiceStatusResponse {
            message: SERVICE_RUNNING_MESSAGE.to_string(),
            mode: mode.as_str().to_string(),
            database_connected,
        }
    }
}
