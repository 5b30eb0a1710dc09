use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Errors a workflow submission can end with. Everything except
/// `StorageError` is raised before any table is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessError {
    /// A required input was empty or zero (400 Bad Request)
    MissingField { field: String },
    /// An input was present but out of range (400 Bad Request)
    ValidationError { field: String, message: String },
    /// An input did not match its expected format (400 Bad Request)
    FormatError { field: String, message: String },
    /// The workflow needs data that has not been registered yet (409 Conflict)
    MissingPrerequisite { message: String },
    /// A dataset file could not be read or written (500 Internal Server Error)
    StorageError { dataset: String, message: String },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::MissingField { field } => {
                write!(f, "Field '{field}' must be filled with a valid value")
            }
            BusinessError::ValidationError { field, message } => {
                write!(f, "Validation error in field '{field}': {message}")
            }
            BusinessError::FormatError { field, message } => {
                write!(f, "Invalid format for field '{field}': {message}")
            }
            BusinessError::MissingPrerequisite { message } => f.write_str(message),
            BusinessError::StorageError { dataset, message } => {
                write!(f, "Storage error on dataset '{dataset}': {message}")
            }
        }
    }
}

impl std::error::Error for BusinessError {}

impl BusinessError {
    /// HTTP status, error code and variant name reported in the response body
    fn status_and_code(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            BusinessError::MissingField { .. } => {
                (StatusCode::BAD_REQUEST, "MISSING_FIELD", "MissingField")
            }
            BusinessError::ValidationError { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "ValidationError")
            }
            BusinessError::FormatError { .. } => {
                (StatusCode::BAD_REQUEST, "FORMAT_ERROR", "FormatError")
            }
            BusinessError::MissingPrerequisite { .. } => (
                StatusCode::CONFLICT,
                "MISSING_PREREQUISITE",
                "MissingPrerequisite",
            ),
            BusinessError::StorageError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "StorageError",
            ),
        }
    }
}

impl IntoResponse for BusinessError {
    fn into_response(self) -> Response {
        let (status, error_code, error_type) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("Rejected submission: {self}");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "type": error_type
            }
        }));

        (status, body).into_response()
    }
}

#[macro_export]
macro_rules! missing_field {
    ($field:expr) => {
        $crate::common::errors::BusinessError::MissingField {
            field: $field.to_string(),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($field:expr, $message:expr) => {
        $crate::common::errors::BusinessError::ValidationError {
            field: $field.to_string(),
            message: $message.to_string(),
        }
    };
}

#[macro_export]
macro_rules! format_error {
    ($field:expr, $message:expr) => {
        $crate::common::errors::BusinessError::FormatError {
            field: $field.to_string(),
            message: $message.to_string(),
        }
    };
}

/// Extension trait turning storage-layer failures into business errors
pub trait StorageErrorExt<T> {
    fn for_dataset(self, dataset: &str) -> BusinessResult<T>;
}

impl<T> StorageErrorExt<T> for anyhow::Result<T> {
    fn for_dataset(self, dataset: &str) -> BusinessResult<T> {
        self.map_err(|err| BusinessError::StorageError {
            dataset: dataset.to_string(),
            message: format!("{err:#}"),
        })
    }
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_creation() {
        let err = missing_field!("variety_name");
        assert_eq!(
            err,
            BusinessError::MissingField {
                field: "variety_name".to_string()
            }
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            missing_field!("code").status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            format_error!("variety_code", "bad").status_and_code().1,
            "FORMAT_ERROR"
        );
        assert_eq!(
            BusinessError::MissingPrerequisite {
                message: "none".to_string()
            }
            .status_and_code()
            .0,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_storage_error_from_anyhow() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("disk full"));
        let err = result.for_dataset("semeio").unwrap_err();

        match err {
            BusinessError::StorageError { dataset, message } => {
                assert_eq!(dataset, "semeio");
                assert!(message.contains("disk full"));
            }
            _ => panic!("Expected storage error"),
        }
    }

    #[tokio::test]
    async fn test_error_type_name_in_body() {
        let response = validation_error!("quantity", "must be at least 1").into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["error"]["type"], "ValidationError");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
