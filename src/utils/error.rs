use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::InvalidEvent;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Registration closed: {0}")]
    RegistrationClosed(String),

    #[error("Duplicate registration: {0}")]
    DuplicateRegistration(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<InvalidEvent> for AppError {
    fn from(err: InvalidEvent) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RegistrationClosed(_) => StatusCode::CONFLICT,
            AppError::DuplicateRegistration(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::RegistrationClosed(_) => "REGISTRATION_CLOSED",
            AppError::DuplicateRegistration(_) => "DUPLICATE_REGISTRATION",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::RegistrationClosed(msg)
            | AppError::DuplicateRegistration(msg) => {
                warn!(error = ?self, message = %msg, "Request rejected");
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        // Only expose high-level message to the client
        let public_message = match &self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::RegistrationClosed(msg)
            | AppError::DuplicateRegistration(msg) => msg.clone(),
            AppError::Database(_) => "A database error occurred".to_string(),
        };

        // Do not expose internal details in the API response
        let details = None;

        error_response(code, public_message, details, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RegistrationClosed("closed".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::DuplicateRegistration("again".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn invalid_event_converts_to_validation_error() {
        let err: AppError = InvalidEvent {
            field: "date_time",
            message: "event cannot start before being published",
        }
        .into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("date_time"));
    }
}
