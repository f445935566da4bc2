use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::Task;
use crate::services::text_extractor::ExtractError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Unsupported file format: {0}. Please upload a PDF or TXT.")]
    UnsupportedFormat(String),

    #[error("Error reading document: {0}")]
    ExtractionError(String),

    #[error("No text found. Please upload a valid text-based document.")]
    EmptyDocument,

    #[error("{task} error: {message}")]
    ServiceError { task: Task, message: String },

    #[error("quiz generation error: invalid JSON returned ({reason}): {excerpt}...")]
    MalformedModelOutput { reason: String, excerpt: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::ExtractionError(_) => "EXTRACTION_ERROR",
            AppError::EmptyDocument => "EMPTY_DOCUMENT",
            AppError::ServiceError { .. } => "SERVICE_ERROR",
            AppError::MalformedModelOutput { .. } => "MALFORMED_MODEL_OUTPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::ExtractionError(_) | AppError::EmptyDocument => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::ServiceError { .. } | AppError::MalformedModelOutput { .. } => {
                StatusCode::BAD_GATEWAY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(declared) => AppError::UnsupportedFormat(declared),
            ExtractError::Extraction(message) => AppError::ExtractionError(message),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::UnsupportedFormat("image/png".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::EmptyDocument.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::MalformedModelOutput {
                reason: "no array of objects found".into(),
                excerpt: "oops".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::NotFound("session".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_service_error_message_names_the_task() {
        let err = AppError::ServiceError {
            task: Task::GenerateQuiz,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "quiz generation error: quota exceeded");

        let err = AppError::ServiceError {
            task: Task::Answer,
            message: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Q&A error: timeout");
    }

    #[test]
    fn test_extract_error_conversion() {
        let err: AppError = ExtractError::UnsupportedFormat("image/png".into()).into();
        assert!(matches!(err, AppError::UnsupportedFormat(ref t) if t == "image/png"));

        let err: AppError = ExtractError::Extraction("bad xref".into()).into();
        assert!(matches!(err, AppError::ExtractionError(_)));
    }
}
