use edi_core::entities::edi_records::{Model as EdiRecord, NewEdiRecord};
use sea_orm::DbErr;
use tokio::sync::RwLock;

use super::traits::{RecordRepository, StorageMode};

struct MemoryState {
    records: Vec<EdiRecord>,
    next_id: i32,
}

/// Process-local store. Records are lost on restart.
pub struct InMemoryRecordRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordRepository for InMemoryRecordRepository {
    fn mode(&self) -> StorageMode {
        StorageMode::InMemory
    }

    async fn list(&self) -> Result<Vec<EdiRecord>, DbErr> {
        // Appends happen in id order, so the vector is already sorted.
        Ok(self.state.read().await.records.clone())
    }

    async fn insert(&self, record: NewEdiRecord) -> Result<EdiRecord, DbErr> {
        // Id assignment and append happen under one write guard.
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| DbErr::Custom("in-memory record id space exhausted".to_string()))?;
        let model = record.with_id(id);
        state.records.push(model.clone());
        Ok(model)
    }

    async fn ping(&self) -> Result<(), DbErr> {
        Ok(())
    }
}
