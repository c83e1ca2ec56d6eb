//! Extractors that report rejections as `{success: false}` envelopes
//!
//! Each wraps the matching axum extractor and keeps its status code, but
//! replaces the plain-text body with [`flagged::error`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::Json;
use axum::response::{IntoResponse, Response};
use herald_response::{JsonResponse, flagged};
use http::StatusCode;
use http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON request body
pub struct Payload<T>(pub T);

/// Query string parameters
pub struct QueryParams<T>(pub T);

/// Path parameters
pub struct PathParam<T>(pub T);

fn reject(status: StatusCode, reason: &str) -> Response {
    let mut res = JsonResponse::new();
    match flagged::error(&mut res, status, reason) {
        Ok(()) => res.into_response(),
        Err(err) => err.into_response(),
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(request, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection: JsonRejection| reject(rejection.status(), &rejection.body_text()))
    }
}

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection: QueryRejection| reject(rejection.status(), &rejection.body_text()))
    }
}

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection: PathRejection| reject(rejection.status(), &rejection.body_text()))
    }
}
