//! Application error taxonomy and HTTP status classification
//!
//! Handlers build an [`AppError`] from business failures; the response layer
//! calls [`http_status`] to turn any error into a status code.

#![allow(clippy::must_use_candidate)]

mod classify;
mod error;

pub use classify::{find_app_error, http_status};
pub use error::{AppError, BoxError, ErrorCode, HttpError};
