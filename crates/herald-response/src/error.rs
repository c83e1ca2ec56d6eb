use axum::Json;
use axum::response::{IntoResponse, Response};
use herald_core::HttpError;
use http::StatusCode;
use thiserror::Error;

use crate::ErrorEnvelope;

/// Failure writing a response body
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The payload could not be serialized to JSON
    #[error("failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl HttpError for ResponseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Encode(_) => "encode_error",
        }
    }

    fn client_message(&self) -> String {
        "failed to encode response".to_owned()
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        tracing::error!(
            error = %self,
            error_type = self.error_type(),
            "response body could not be written"
        );

        let body = ErrorEnvelope::new(self.client_message());
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde::ser::Error as _;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn encode_failure_is_a_generic_500_envelope() {
        let err = ResponseError::Encode(serde_json::Error::custom("key must be a string"));
        assert_eq!(err.error_type(), "encode_error");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"success": false, "error": "failed to encode response"}));
    }
}
