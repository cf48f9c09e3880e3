pub mod error_handler;
pub mod health;
pub mod records;
