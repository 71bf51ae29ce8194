//! Domain error types for the school directory server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use std::collections::BTreeMap;

use actix_web::{HttpResponse, ResponseError};

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed. Every error raised by the persistence
    /// layer is wrapped into this variant, including "not found" on reads.
    #[error("Database error: {0}")]
    Database(String),

    /// Field validation failed; carries one message per failing field.
    #[error("Validation failed")]
    Validation(BTreeMap<&'static str, String>),

    /// Uploaded file exceeds the size limit.
    #[error("Image file size must be less than 5MB")]
    FileTooLarge,

    /// Uploaded file has a MIME type outside the allow-list.
    #[error("Only JPEG, PNG, and WebP image files are allowed")]
    UnsupportedFileType,

    /// Writing an accepted upload to disk failed.
    #[error("Failed to store uploaded file: {0}")]
    StorageWrite(String),

    /// Malformed request data (multipart parse errors and the like).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: "An internal database error occurred".to_string(),
                    details: None,
                })
            }
            AppError::Validation(fields) => HttpResponse::BadRequest().json(ErrorBody {
                error: "Validation failed".to_string(),
                details: serde_json::to_value(fields).ok(),
            }),
            AppError::FileTooLarge | AppError::UnsupportedFileType => {
                HttpResponse::BadRequest().json(ErrorBody {
                    error: self.to_string(),
                    details: None,
                })
            }
            AppError::StorageWrite(err_str) => {
                tracing::error!("Storage write failed: {}", err_str);
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: self.to_string(),
                    details: None,
                })
            }
            AppError::InvalidInput(_) => HttpResponse::BadRequest().json(ErrorBody {
                error: self.to_string(),
                details: None,
            }),
        }
    }
}

/// Error response body matching the OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            AppError::FileTooLarge.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedFileType.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation(BTreeMap::new()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidInput("bad form".to_string())
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors_map_to_500() {
        assert_eq!(
            AppError::Database("connection refused".to_string())
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StorageWrite("disk full".to_string())
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_file_too_large_message() {
        assert_eq!(
            AppError::FileTooLarge.to_string(),
            "Image file size must be less than 5MB"
        );
    }

    #[tokio::test]
    async fn test_validation_body_carries_field_details() {
        let mut fields = BTreeMap::new();
        fields.insert("name", "Name must be between 2 and 255 characters".to_string());

        let response = AppError::Validation(fields).error_response();
        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");

        assert_eq!(value["error"], "Validation failed");
        assert_eq!(
            value["details"]["name"],
            "Name must be between 2 and 255 characters"
        );
    }
}
