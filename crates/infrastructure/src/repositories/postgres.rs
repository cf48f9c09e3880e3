use edi_core::entities::edi_records::{self, Model as EdiRecord, NewEdiRecord};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, TransactionTrait,
};

use super::traits::{RecordRepository, StorageMode};

pub struct PostgresRecordRepository {
    db: DatabaseConnection,
}

impl PostgresRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl RecordRepository for PostgresRecordRepository {
    fn mode(&self) -> StorageMode {
        StorageMode::Database
    }

    async fn list(&self) -> Result<Vec<EdiRecord>, DbErr> {
        edi_records::Entity::find()
            .order_by_asc(edi_records::Column::Id)
            .all(&self.db)
            .await
    }

    async fn insert(&self, record: NewEdiRecord) -> Result<EdiRecord, DbErr> {
        let txn = self.db.begin().await?;

        match record.into_active_model().insert(&txn).await {
            Ok(model) => {
                txn.commit().await?;
                Ok(model)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback after failed insert also failed");
                }
                Err(err)
            }
        }
    }

    async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    fn new_record(client: &str) -> NewEdiRecord {
        NewEdiRecord {
            client_code: client.to_string(),
            product_code: "P1".to_string(),
            date: "2024-01-01".to_string(),
            quantity: 10,
            edi_week_number: Some(1),
            expected_delivery_date: None,
            delivery_nature: Some("Firm".to_string()),
            delivered_quantity: None,
        }
    }

    /// Statements the mock connection saw, in order.
    fn logged_statements(repo: PostgresRecordRepository) -> String {
        let PostgresRecordRepository { db } = repo;
        format!("{:?}", db.into_transaction_log())
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let stored = new_record("C1").with_id(7);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = PostgresRecordRepository::new(db);

        let inserted = repo.insert(new_record("C1")).await.unwrap();

        assert_eq!(inserted, stored);

        let log = logged_statements(repo);
        let insert_at = log.find("INSERT INTO").unwrap();
        assert!(log.find("BEGIN").unwrap() < insert_at);
        assert!(log.rfind("COMMIT").unwrap() > insert_at);
        assert!(!log.contains("ROLLBACK"));
    }

    #[tokio::test]
    async fn test_insert_surfaces_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "null value in column \"ClientCode\"".to_string(),
            ))])
            .into_connection();
        let repo = PostgresRecordRepository::new(db);

        let err = repo.insert(new_record("C1")).await.unwrap_err();

        assert!(err.to_string().contains("ClientCode"));

        let log = logged_statements(repo);
        let insert_at = log.find("INSERT INTO").unwrap();
        assert!(log.rfind("ROLLBACK").unwrap() > insert_at);
        assert!(!log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_list_returns_rows_in_query_order() {
        let rows = vec![new_record("C1").with_id(1), new_record("C2").with_id(2)];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let repo = PostgresRecordRepository::new(db);

        let listed = repo.list().await.unwrap();

        assert_eq!(listed, rows);
        assert_eq!(repo.mode(), StorageMode::Database);
    }
}
