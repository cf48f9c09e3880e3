use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation errors (400)
    #[error("{0}")]
    Validation(String),

    /// Database errors (500)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Internal server errors (500): broken invariants outside storage and
    /// payload validation
    #[error("An unexpected error occurred: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Database(_) | AppError::Internal(_) => 500,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        ErrorResponse {
            error: err.to_string(),
            error_code: err.error_code().to_string(),
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("Missing required fields: quantity".to_string());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Missing required fields: quantity");
    }

    #[test]
    fn test_database_error_keeps_underlying_message() {
        let err: AppError = DbErr::Conn(RuntimeErr::Internal("connection refused".to_string())).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert!(err.to_string().starts_with("Database error: "));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_internal_error_from_anyhow() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status_code(), 500);

        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "An unexpected error occurred: boom");
        assert_eq!(body.error_code, "INTERNAL_ERROR");
    }
}
