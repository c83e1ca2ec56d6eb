use serde::{Deserialize, Serialize};

/// Error text of every validation failure envelope
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Text that replaces a redacted internal error message
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

// -- `{success, data | error}` shape --

/// Successful response: `{"success": true, "data": ...}`
///
/// `data` is left out of the JSON entirely when absent.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> SuccessEnvelope<T> {
    pub const fn new(data: Option<T>) -> Self {
        Self { success: true, data }
    }

    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

/// Failed response: `{"success": false, "error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    success: bool,
    error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field as the client sent it
    pub field: String,
    /// Why the value was rejected
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure: `{"success": false, "error": "Validation failed", "fields": [...]}`
///
/// Field order is kept exactly as supplied.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorEnvelope {
    success: bool,
    error: &'static str,
    fields: Vec<FieldError>,
}

impl ValidationErrorEnvelope {
    pub const fn new(fields: Vec<FieldError>) -> Self {
        Self {
            success: false,
            error: VALIDATION_FAILED,
            fields,
        }
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }
}

/// One page of results, carried as the `data` of a [`SuccessEnvelope`]
///
/// Values are passed through as given; `data` is expected to hold only the
/// requested page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub data: T,
}

// -- `{data | error}` shape --

/// Successful response: `{"data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failed response: `{"error": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<E> {
    pub error: E,
}

/// Single error detail: `{"code": 404, "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// HTTP status code, repeated in the body
    pub code: u16,
    pub message: String,
}

/// Several errors reported together: `{"code": 400, "errors": ["...", "..."]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    pub code: u16,
    pub errors: Vec<String>,
}
