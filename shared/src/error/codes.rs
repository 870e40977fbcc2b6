//! Unified error codes for the Patas crates
//!
//! This module defines all error codes used across the client and editor crates.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Record store errors
//! - 3xxx: Media errors
//! - 4xxx: Geo errors
//! - 5xxx: Editor errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1003,
    /// Authentication service rejected the request (message passed through)
    AuthRejected = 1004,
    /// Email address already registered
    EmailInUse = 1005,
    /// Password rejected by the service policy
    WeakPassword = 1006,

    // ==================== 2xxx: Record Store ====================
    /// Record store unreachable or errored
    StoreUnavailable = 2001,
    /// Record store denied the operation
    StoreDenied = 2002,

    // ==================== 3xxx: Media ====================
    /// Image upload failed
    UploadFailed = 3001,
    /// File too large
    FileTooLarge = 3002,
    /// Unsupported file format
    UnsupportedFileFormat = 3003,
    /// Invalid/corrupted image file
    InvalidImageFile = 3004,
    /// Empty file provided
    EmptyFile = 3005,
    /// Local file could not be read
    FileReadFailed = 3006,
    /// Stored object could not be deleted
    StorageDeleteFailed = 3007,

    // ==================== 4xxx: Geo ====================
    /// Coordinate outside valid latitude/longitude ranges
    CoordinateOutOfRange = 4001,
    /// Record requires a map location
    MissingCoordinate = 4002,

    // ==================== 5xxx: Editor ====================
    /// A save is already in progress
    EditorBusy = 5001,
    /// No record is open in the editor
    NoOpenRecord = 5002,
    /// Operation requires editing mode
    NotEditing = 5003,
    /// Operation requires viewing mode
    NotViewing = 5004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::AuthRejected => "Authentication service rejected the request",
            ErrorCode::EmailInUse => "Email address is already in use",
            ErrorCode::WeakPassword => "Password rejected by the service policy",

            // Record store
            ErrorCode::StoreUnavailable => "Record store is unavailable",
            ErrorCode::StoreDenied => "Record store denied the operation",

            // Media
            ErrorCode::UploadFailed => "Image upload failed",
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::FileReadFailed => "Failed to read local file",
            ErrorCode::StorageDeleteFailed => "Failed to delete stored object",

            // Geo
            ErrorCode::CoordinateOutOfRange => "Coordinate is out of range",
            ErrorCode::MissingCoordinate => "A map location is required",

            // Editor
            ErrorCode::EditorBusy => "A save is already in progress",
            ErrorCode::NoOpenRecord => "No record is open",
            ErrorCode::NotEditing => "Editor is not in editing mode",
            ErrorCode::NotViewing => "Editor is not in viewing mode",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::SessionExpired),
            1004 => Ok(ErrorCode::AuthRejected),
            1005 => Ok(ErrorCode::EmailInUse),
            1006 => Ok(ErrorCode::WeakPassword),

            // Record store
            2001 => Ok(ErrorCode::StoreUnavailable),
            2002 => Ok(ErrorCode::StoreDenied),

            // Media
            3001 => Ok(ErrorCode::UploadFailed),
            3002 => Ok(ErrorCode::FileTooLarge),
            3003 => Ok(ErrorCode::UnsupportedFileFormat),
            3004 => Ok(ErrorCode::InvalidImageFile),
            3005 => Ok(ErrorCode::EmptyFile),
            3006 => Ok(ErrorCode::FileReadFailed),
            3007 => Ok(ErrorCode::StorageDeleteFailed),

            // Geo
            4001 => Ok(ErrorCode::CoordinateOutOfRange),
            4002 => Ok(ErrorCode::MissingCoordinate),

            // Editor
            5001 => Ok(ErrorCode::EditorBusy),
            5002 => Ok(ErrorCode::NoOpenRecord),
            5003 => Ok(ErrorCode::NotEditing),
            5004 => Ok(ErrorCode::NotViewing),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Auth
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::SessionExpired.code(), 1003);
        assert_eq!(ErrorCode::AuthRejected.code(), 1004);
        assert_eq!(ErrorCode::EmailInUse.code(), 1005);
        assert_eq!(ErrorCode::WeakPassword.code(), 1006);

        // Record store
        assert_eq!(ErrorCode::StoreUnavailable.code(), 2001);
        assert_eq!(ErrorCode::StoreDenied.code(), 2002);

        // Media
        assert_eq!(ErrorCode::UploadFailed.code(), 3001);
        assert_eq!(ErrorCode::FileTooLarge.code(), 3002);
        assert_eq!(ErrorCode::UnsupportedFileFormat.code(), 3003);
        assert_eq!(ErrorCode::InvalidImageFile.code(), 3004);
        assert_eq!(ErrorCode::EmptyFile.code(), 3005);
        assert_eq!(ErrorCode::FileReadFailed.code(), 3006);
        assert_eq!(ErrorCode::StorageDeleteFailed.code(), 3007);

        // Geo
        assert_eq!(ErrorCode::CoordinateOutOfRange.code(), 4001);
        assert_eq!(ErrorCode::MissingCoordinate.code(), 4002);

        // Editor
        assert_eq!(ErrorCode::EditorBusy.code(), 5001);
        assert_eq!(ErrorCode::NoOpenRecord.code(), 5002);
        assert_eq!(ErrorCode::NotEditing.code(), 5003);
        assert_eq!(ErrorCode::NotViewing.code(), 5004);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::NetworkError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9003);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::StoreUnavailable));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::UploadFailed));
        assert_eq!(
            ErrorCode::try_from(4001),
            Ok(ErrorCode::CoordinateOutOfRange)
        );
        assert_eq!(ErrorCode::try_from(5001), Ok(ErrorCode::EditorBusy));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::StoreUnavailable;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "2001");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, ErrorCode::NotFound);

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::UploadFailed);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::StoreUnavailable), "2001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::StoreUnavailable.message(),
            "Record store is unavailable"
        );
        assert_eq!(ErrorCode::UploadFailed.message(), "Image upload failed");
        assert_eq!(
            ErrorCode::EditorBusy.message(),
            "A save is already in progress"
        );
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::StoreUnavailable,
            ErrorCode::UploadFailed,
            ErrorCode::CoordinateOutOfRange,
            ErrorCode::EditorBusy,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
