pub mod error;
pub mod records;

pub use error::{AppError, AppResult};
