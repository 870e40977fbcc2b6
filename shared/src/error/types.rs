//! Error types

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the Patas crates, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field validation error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create an invalid-format validation error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create an out-of-range validation error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a store unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreUnavailable, msg)
    }

    /// Create an upload failed error
    pub fn upload_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UploadFailed, msg)
    }

    /// Create an auth rejection carrying the service's message verbatim
    pub fn auth_rejected(service_message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AuthRejected, service_message)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create an editor busy error
    pub fn busy() -> Self {
        Self::new(ErrorCode::EditorBusy)
    }

    /// Create a no-open-record error
    pub fn no_open_record() -> Self {
        Self::new(ErrorCode::NoOpenRecord)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Name must not be empty");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Name must not be empty");
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "name");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::required_field("name");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name is required");
        assert!(err.details.as_ref().unwrap().contains_key("field"));

        let err = AppError::not_found("Animal");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Animal not found");
        assert!(err.details.as_ref().unwrap().contains_key("resource"));

        let err = AppError::store_unavailable("connection refused");
        assert_eq!(err.code, ErrorCode::StoreUnavailable);
        assert_eq!(err.message, "connection refused");

        let err = AppError::auth_rejected("EMAIL_NOT_FOUND");
        assert_eq!(err.code, ErrorCode::AuthRejected);
        assert_eq!(err.message, "EMAIL_NOT_FOUND");

        let err = AppError::busy();
        assert_eq!(err.code, ErrorCode::EditorBusy);

        let err = AppError::internal("Something went wrong");
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Animal not found");
        assert_eq!(format!("{}", err), "Animal not found");
    }

    #[test]
    fn test_app_error_serialize() {
        let err = AppError::new(ErrorCode::StoreUnavailable);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":2001"));
        assert!(json.contains("Record store is unavailable"));
    }
}
