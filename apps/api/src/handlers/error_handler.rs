use actix_web::{
    error::ResponseError,
    http::StatusCode,
    HttpResponse,
};
use application::error::ErrorResponse;
use application::AppError;
use std::fmt;

/// Wrapper around AppError to implement ResponseError (which is defined in actix-web)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl fmt::Display for HttpAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl ResponseError for HttpAppError {
    fn status_code(&self) -> StatusCode {
        let code = self.0.status_code();
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let body = ErrorResponse::from(&self.0);

        if status_code.is_server_error() {
            tracing::error!(
                error_code = %body.error_code,
                error_message = %body.error,
                "Internal Server Error: {:?}",
                self.0
            );
        } else {
            tracing::warn!(
                error_code = %body.error_code,
                error_message = %body.error,
                "Rejected request"
            );
        }

        HttpResponse::build(status_code).json(body)
    }
}
