//! Error handling models and utilities

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the admin interface
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AdminApiError {
    /// Client-side validation errors (empty required field, wrong value kind)
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Authentication errors (missing or rejected access token)
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Authorization errors
    #[error("Access denied: {message}")]
    Permission { message: String },

    /// API communication errors
    #[error("API request failed: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// Network/connectivity errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response parsing errors
    #[error("Parse error: {message}")]
    Parse { message: String, format: String },

    /// Client-side errors (frontend specific)
    #[error("Client error: {message}")]
    Client { message: String },
}

/// Result type alias for admin UI operations
pub type AdminResult<T> = Result<T, AdminApiError>;

impl AdminApiError {
    /// Get the HTTP status code this error corresponds to
    pub fn status_code(&self) -> u16 {
        match self {
            AdminApiError::Validation { .. } => 400,
            AdminApiError::Auth { .. } => 401,
            AdminApiError::Permission { .. } => 403,
            AdminApiError::Api {
                status_code: Some(code),
                ..
            } => *code,
            AdminApiError::Api { .. } => 500,
            AdminApiError::Network { .. } => 503,
            AdminApiError::Parse { .. } => 400,
            AdminApiError::Client { .. } => 400,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AdminApiError::Validation { message, field } => match field {
                Some(field) => format!("Validation error in field '{}': {}", field, message),
                None => format!("Validation error: {}", message),
            },
            AdminApiError::Auth { message } => format!("Authentication required: {}", message),
            AdminApiError::Permission { message } => format!("Permission denied: {}", message),
            AdminApiError::Api { message, .. } => format!("API error: {}", message),
            AdminApiError::Network { message } => format!("Network error: {}", message),
            AdminApiError::Parse { message, format } => {
                format!("Failed to parse {} response: {}", format, message)
            }
            AdminApiError::Client { message } => format!("Client error: {}", message),
        }
    }

    /// Stable error code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminApiError::Validation { .. } => "VALIDATION_ERROR",
            AdminApiError::Auth { .. } => "AUTH_ERROR",
            AdminApiError::Permission { .. } => "PERMISSION_ERROR",
            AdminApiError::Api { .. } => "API_ERROR",
            AdminApiError::Network { .. } => "NETWORK_ERROR",
            AdminApiError::Parse { .. } => "PARSE_ERROR",
            AdminApiError::Client { .. } => "CLIENT_ERROR",
        }
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AdminApiError::Auth { .. })
            || matches!(
                self,
                AdminApiError::Api {
                    status_code: Some(401),
                    ..
                }
            )
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AdminApiError::Validation { .. })
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        match self {
            AdminApiError::Api {
                status_code: Some(code),
                ..
            } => *code >= 400 && *code < 500,
            AdminApiError::Validation { .. }
            | AdminApiError::Auth { .. }
            | AdminApiError::Permission { .. }
            | AdminApiError::Parse { .. }
            | AdminApiError::Client { .. } => true,
            _ => false,
        }
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        match self {
            AdminApiError::Api {
                status_code: Some(code),
                ..
            } => *code >= 500,
            AdminApiError::Api {
                status_code: None, ..
            }
            | AdminApiError::Network { .. } => true,
            _ => false,
        }
    }
}

/// Helper constructors
impl AdminApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AdminApiError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AdminApiError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        AdminApiError::Auth {
            message: message.into(),
        }
    }

    /// Create a permission error
    pub fn permission(message: impl Into<String>) -> Self {
        AdminApiError::Permission {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        AdminApiError::Api {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create an API error with status code
    pub fn api_with_status(message: impl Into<String>, status_code: u16) -> Self {
        AdminApiError::Api {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        AdminApiError::Network {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, format: impl Into<String>) -> Self {
        AdminApiError::Parse {
            message: message.into(),
            format: format.into(),
        }
    }

    /// Create a client error
    pub fn client(message: impl Into<String>) -> Self {
        AdminApiError::Client {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AdminApiError {
    fn from(err: serde_json::Error) -> Self {
        AdminApiError::Parse {
            message: err.to_string(),
            format: "JSON".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AdminApiError::validation("test").status_code(), 400);
        assert_eq!(AdminApiError::auth("test").status_code(), 401);
        assert_eq!(AdminApiError::permission("test").status_code(), 403);
        assert_eq!(AdminApiError::api("test").status_code(), 500);
        assert_eq!(
            AdminApiError::api_with_status("test", 502).status_code(),
            502
        );
        assert_eq!(AdminApiError::network("test").status_code(), 503);
        assert_eq!(AdminApiError::parse("test", "JSON").status_code(), 400);
        assert_eq!(AdminApiError::client("test").status_code(), 400);
    }

    #[test]
    fn test_error_user_messages() {
        let error = AdminApiError::validation("value is required");
        assert_eq!(error.user_message(), "Validation error: value is required");

        let error = AdminApiError::validation_field("username", "must not be empty");
        assert_eq!(
            error.user_message(),
            "Validation error in field 'username': must not be empty"
        );

        let error = AdminApiError::auth("no token");
        assert_eq!(error.user_message(), "Authentication required: no token");

        let error = AdminApiError::parse("unexpected token", "JSON");
        assert_eq!(
            error.user_message(),
            "Failed to parse JSON response: unexpected token"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AdminApiError::validation("x").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AdminApiError::auth("x").error_code(), "AUTH_ERROR");
        assert_eq!(
            AdminApiError::permission("x").error_code(),
            "PERMISSION_ERROR"
        );
        assert_eq!(AdminApiError::api("x").error_code(), "API_ERROR");
        assert_eq!(AdminApiError::network("x").error_code(), "NETWORK_ERROR");
        assert_eq!(AdminApiError::parse("x", "JSON").error_code(), "PARSE_ERROR");
        assert_eq!(AdminApiError::client("x").error_code(), "CLIENT_ERROR");
    }

    #[test]
    fn test_error_type_checking() {
        assert!(AdminApiError::auth("x").is_auth_error());
        assert!(AdminApiError::api_with_status("x", 401).is_auth_error());
        assert!(!AdminApiError::permission("x").is_auth_error());

        assert!(AdminApiError::validation("x").is_validation_error());
        assert!(!AdminApiError::api("x").is_validation_error());

        assert!(AdminApiError::validation("x").is_client_error());
        assert!(AdminApiError::api_with_status("x", 404).is_client_error());
        assert!(!AdminApiError::api_with_status("x", 500).is_client_error());

        assert!(AdminApiError::api_with_status("x", 500).is_server_error());
        assert!(AdminApiError::api("x").is_server_error());
        assert!(AdminApiError::network("x").is_server_error());
        assert!(!AdminApiError::validation("x").is_server_error());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: AdminApiError = json_error.into();

        assert!(matches!(error, AdminApiError::Parse { format, .. } if format == "JSON"));
    }

    #[test]
    fn test_error_serialization_roundtrip() {
        let error = AdminApiError::validation_field("goLiveMessage", "must not be empty");

        let serialized = serde_json::to_string(&error).expect("serialize error");
        let deserialized: AdminApiError =
            serde_json::from_str(&serialized).expect("deserialize error");

        assert_eq!(error, deserialized);
        assert_eq!(error.user_message(), deserialized.user_message());
    }
}
