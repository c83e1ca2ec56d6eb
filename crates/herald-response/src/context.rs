use axum::body::{Body, Bytes};
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;

use crate::ResponseError;

/// Write target for envelope builders
///
/// Mirrors what a web framework exposes to a handler: a status setter and a
/// JSON body writer. Write failures are returned to the caller as-is.
pub trait ResponseContext {
    /// Error produced when the body cannot be written
    type Error;

    /// Set the response status
    fn set_status(&mut self, status: StatusCode);

    /// Serialize `body` as the JSON response body
    ///
    /// # Errors
    ///
    /// Returns the context's own write failure
    fn write_json<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<(), Self::Error>;
}

/// Buffered axum response
///
/// Starts as an empty `200 OK`. Handlers pass it to a builder and return it
/// directly, since it implements [`IntoResponse`].
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    body: Option<Bytes>,
}

impl JsonResponse {
    /// Empty `200 OK` response
    pub const fn new() -> Self {
        Self {
            status: StatusCode::OK,
            body: None,
        }
    }

    /// Status set so far
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Encoded JSON body, if one was written
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl Default for JsonResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseContext for JsonResponse {
    type Error = ResponseError;

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<(), Self::Error> {
        let bytes = serde_json::to_vec(body).map_err(ResponseError::Encode)?;
        self.body = Some(Bytes::from(bytes));
        Ok(())
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        let Some(bytes) = self.body else {
            return self.status.into_response();
        };

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}
