//! JSON response envelopes for axum handlers
//!
//! Two envelope shapes are provided side by side:
//!
//! - [`flagged`]: `{"success": true, "data": ...}` / `{"success": false, "error": "..."}`,
//!   the canonical shape
//! - [`data`]: `{"data": ...}` / `{"error": {"code": 404, "message": "..."}}`,
//!   with the status resolved from the error itself
//!
//! Builders write into any [`ResponseContext`]; [`JsonResponse`] is the
//! axum implementation.

#![allow(clippy::must_use_candidate)]

mod context;
pub mod data;
mod envelope;
mod error;
pub mod flagged;

pub use context::{JsonResponse, ResponseContext};
pub use data::DataResponder;
pub use envelope::*;
pub use error::ResponseError;
