// Storage backends behind one trait; handlers never see which one is live.

pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryRecordRepository;
pub use postgres::PostgresRecordRepository;
pub use traits::{RecordRepository, StorageMode};
