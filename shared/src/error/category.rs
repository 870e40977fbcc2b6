//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Record store errors
/// - 3xxx: Media errors
/// - 4xxx: Geo errors
/// - 5xxx: Editor errors
/// - 9xxx: System errors
///
/// Hosts use the category to decide how an error is surfaced: validation
/// errors re-prompt inline, store and media errors become dismissable
/// notices with the draft preserved, auth errors block until login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Record store errors (2xxx)
    Store,
    /// Media errors (3xxx)
    Media,
    /// Geo errors (4xxx)
    Geo,
    /// Editor errors (5xxx)
    Editor,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Store,
            3000..4000 => Self::Media,
            4000..5000 => Self::Geo,
            5000..6000 => Self::Editor,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Store => "store",
            Self::Media => "media",
            Self::Geo => "geo",
            Self::Editor => "editor",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Auth);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Store);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Media);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Geo);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Editor);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::StoreUnavailable.category(), ErrorCategory::Store);
        assert_eq!(ErrorCode::UploadFailed.category(), ErrorCategory::Media);
        assert_eq!(
            ErrorCode::CoordinateOutOfRange.category(),
            ErrorCategory::Geo
        );
        assert_eq!(ErrorCode::EditorBusy.category(), ErrorCategory::Editor);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Auth.name(), "auth");
        assert_eq!(ErrorCategory::Store.name(), "store");
        assert_eq!(ErrorCategory::Media.name(), "media");
        assert_eq!(ErrorCategory::Geo.name(), "geo");
        assert_eq!(ErrorCategory::Editor.name(), "editor");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Auth;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"auth\"");

        let category: ErrorCategory = serde_json::from_str("\"store\"").unwrap();
        assert_eq!(category, ErrorCategory::Store);
    }
}
