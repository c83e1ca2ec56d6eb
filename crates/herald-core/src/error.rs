use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error used as the optional cause of an [`AppError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Trait for errors that can be converted to HTTP responses
///
/// The response layer reads status and message through this trait, so
/// error types never need to depend on axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `record_not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Application error kinds with a fixed HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Unexpected failure inside the application
    Internal,
    /// A record with the same identity already exists
    DuplicatedRecord,
    /// A field has the wrong type
    InvalidFieldType,
    /// A field has a value outside its allowed set
    InvalidFieldValue,
    /// A required field is missing
    RequiredField,
    /// Two values that must match do not (e.g. password confirmation)
    NotMatched,
    /// The caller is not authenticated
    Unauthorized,
    /// The caller is authenticated but lacks permission
    PermissionDenied,
    /// The caller's account has not been activated yet
    NotActivated,
    /// The requested record does not exist
    RecordNotFound,
    /// A code this version does not recognize
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    /// HTTP status code for this error kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::DuplicatedRecord => StatusCode::CONFLICT,
            Self::InvalidFieldType | Self::InvalidFieldValue | Self::RequiredField | Self::NotMatched => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied | Self::NotActivated => StatusCode::FORBIDDEN,
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::Internal | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable wire name, identical to the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::DuplicatedRecord => "duplicated_record",
            Self::InvalidFieldType => "invalid_field_type",
            Self::InvalidFieldValue => "invalid_field_value",
            Self::RequiredField => "required_field",
            Self::NotMatched => "not_matched",
            Self::Unauthorized => "unauthorized",
            Self::PermissionDenied => "permission_denied",
            Self::NotActivated => "not_activated",
            Self::RecordNotFound => "record_not_found",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error carrying an [`ErrorCode`]
///
/// Displays as its message. The optional source is kept for logging and is
/// never shown to clients.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    code: ErrorCode,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl AppError {
    /// Create an error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Error kind
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convenience constructor for [`ErrorCode::Internal`]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicatedRecord`]
    pub fn duplicated_record(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicatedRecord, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidFieldType`]
    pub fn invalid_field_type(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFieldType, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidFieldValue`]
    pub fn invalid_field_value(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFieldValue, message)
    }

    /// Convenience constructor for [`ErrorCode::RequiredField`]
    pub fn required_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequiredField, message)
    }

    /// Convenience constructor for [`ErrorCode::NotMatched`]
    pub fn not_matched(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotMatched, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::PermissionDenied`]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Convenience constructor for [`ErrorCode::NotActivated`]
    pub fn not_activated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotActivated, message)
    }

    /// Convenience constructor for [`ErrorCode::RecordNotFound`]
    pub fn record_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RecordNotFound, message)
    }
}

impl HttpError for AppError {
    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    fn error_type(&self) -> &str {
        self.code.as_str()
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}
