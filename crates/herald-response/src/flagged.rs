//! Builders for the `{success, data | error}` envelope
//!
//! Every function sets the status and writes the body into the given
//! context. The only possible error is the context's own write failure.

use http::StatusCode;
use serde::Serialize;

use crate::{ErrorEnvelope, FieldError, Pagination, ResponseContext, SuccessEnvelope, ValidationErrorEnvelope};

/// Write `{"success": true, "data": ...}` with `status`
///
/// A `204 No Content` status writes no body at all and ignores `data`.
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn success<C, T>(ctx: &mut C, status: StatusCode, data: Option<T>) -> Result<(), C::Error>
where
    C: ResponseContext,
    T: Serialize,
{
    ctx.set_status(status);

    if status == StatusCode::NO_CONTENT {
        tracing::debug!(status = status.as_u16(), "writing status-only response");
        return Ok(());
    }

    tracing::debug!(status = status.as_u16(), "writing success envelope");
    ctx.write_json(&SuccessEnvelope::new(data))
}

/// `200 OK` with `data`
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn ok<C, T>(ctx: &mut C, data: T) -> Result<(), C::Error>
where
    C: ResponseContext,
    T: Serialize,
{
    success(ctx, StatusCode::OK, Some(data))
}

/// `201 Created` with `data`
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn created<C, T>(ctx: &mut C, data: T) -> Result<(), C::Error>
where
    C: ResponseContext,
    T: Serialize,
{
    success(ctx, StatusCode::CREATED, Some(data))
}

/// `204 No Content` without a body
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn no_content<C: ResponseContext>(ctx: &mut C) -> Result<(), C::Error> {
    success::<C, ()>(ctx, StatusCode::NO_CONTENT, None)
}

/// Write `{"success": false, "error": message}` with `status`
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn error<C: ResponseContext>(ctx: &mut C, status: StatusCode, message: &str) -> Result<(), C::Error> {
    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), error = message, "writing server error envelope");
    } else {
        tracing::debug!(status = status.as_u16(), "writing error envelope");
    }

    ctx.set_status(status);
    ctx.write_json(&ErrorEnvelope::new(message))
}

/// `422 Unprocessable Entity` listing the rejected fields
///
/// The status does not depend on the fields; an empty list still yields 422.
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn validation_error<C: ResponseContext>(ctx: &mut C, fields: Vec<FieldError>) -> Result<(), C::Error> {
    tracing::debug!(fields = fields.len(), "writing validation error envelope");

    ctx.set_status(StatusCode::UNPROCESSABLE_ENTITY);
    ctx.write_json(&ValidationErrorEnvelope::new(fields))
}

/// `200 OK` with a [`Pagination`] as `data`
///
/// `data` must already be the requested page; nothing is sliced or checked.
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn paginate<C, T>(ctx: &mut C, page: u64, page_size: u64, total: u64, data: T) -> Result<(), C::Error>
where
    C: ResponseContext,
    T: Serialize,
{
    let page = Pagination {
        total,
        page,
        page_size,
        data,
    };

    success(ctx, StatusCode::OK, Some(page))
}
