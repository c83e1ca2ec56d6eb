//! Builders for the `{data | error}` envelope
//!
//! Unlike [`flagged`](crate::flagged), error responses take the error value
//! itself and resolve the status with [`herald_core::http_status`].

use std::error::Error;

use herald_config::{MultiErrorStatus, ResponseConfig};
use herald_core::{AppError, HttpError, find_app_error, http_status};
use http::StatusCode;
use serde::Serialize;

use crate::{DataEnvelope, ErrorDetail, ErrorList, ErrorResponse, INTERNAL_SERVER_ERROR, ResponseContext};

/// `{data | error}` builder carrying a [`ResponseConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataResponder {
    config: ResponseConfig,
}

impl DataResponder {
    pub const fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    /// Write `{"data": ...}` with `status`
    ///
    /// # Errors
    ///
    /// Returns the context's write failure unchanged
    pub fn success<C, T>(&self, ctx: &mut C, status: StatusCode, data: T) -> Result<(), C::Error>
    where
        C: ResponseContext,
        T: Serialize,
    {
        tracing::debug!(status = status.as_u16(), "writing data envelope");

        ctx.set_status(status);
        ctx.write_json(&DataEnvelope { data })
    }

    /// Write `{"error": {"code": <status>, "message": ...}}`
    ///
    /// The status comes from classifying `err`. The message is `message`
    /// when given and non-empty, otherwise the error's own text (replaced
    /// for 500s when `redact_internal` is set).
    ///
    /// # Errors
    ///
    /// Returns the context's write failure unchanged
    pub fn error<C>(&self, ctx: &mut C, err: &(dyn Error + 'static), message: Option<&str>) -> Result<(), C::Error>
    where
        C: ResponseContext,
    {
        let status = http_status(err);
        let message = match message.filter(|m| !m.is_empty()) {
            Some(text) => text.to_owned(),
            None => self.client_text(err, status),
        };

        Self::write_error(ctx, err, status, message)
    }

    /// Report a list of errors
    ///
    /// A single error is written as [`error`](Self::error) would write it
    /// with its own text, subject to the same redaction. Any other count is
    /// written as `{"error": {"code": ..., "errors": [...]}}` with the status
    /// chosen by [`MultiErrorStatus`].
    ///
    /// # Errors
    ///
    /// Returns the context's write failure unchanged
    pub fn errors<C>(&self, ctx: &mut C, errs: &[&(dyn Error + 'static)]) -> Result<(), C::Error>
    where
        C: ResponseContext,
    {
        if let &[only] = errs {
            let status = http_status(only);
            let text = self.client_text(only, status);
            return Self::write_error(ctx, only, status, text);
        }

        let status = self.multi_error_status(errs);
        let errors = errs.iter().map(|&err| self.client_text(err, http_status(err))).collect();

        tracing::debug!(status = status.as_u16(), count = errs.len(), "writing error list");

        ctx.set_status(status);
        ctx.write_json(&ErrorResponse {
            error: ErrorList {
                code: status.as_u16(),
                errors,
            },
        })
    }

    fn write_error<C>(
        ctx: &mut C,
        err: &(dyn Error + 'static),
        status: StatusCode,
        message: String,
    ) -> Result<(), C::Error>
    where
        C: ResponseContext,
    {
        if status.is_server_error() {
            let error_type = find_app_error(err).map_or("unclassified", AppError::error_type);
            tracing::warn!(
                status = status.as_u16(),
                error = %err,
                error_type,
                "request failed with server error"
            );
        }

        ctx.set_status(status);
        ctx.write_json(&ErrorResponse {
            error: ErrorDetail {
                code: status.as_u16(),
                message,
            },
        })
    }

    fn multi_error_status(&self, errs: &[&(dyn Error + 'static)]) -> StatusCode {
        let classified = errs.iter().map(|&err| http_status(err));

        match self.config.multi_error_status {
            MultiErrorStatus::BadRequest => {
                if classified.clone().any(|status| status != StatusCode::BAD_REQUEST) {
                    tracing::debug!("error list contains non-400 errors, responding 400 per policy");
                }
                StatusCode::BAD_REQUEST
            }
            MultiErrorStatus::Classified => classified
                .max_by_key(|status| status.as_u16())
                .unwrap_or(StatusCode::BAD_REQUEST),
        }
    }

    fn client_text(&self, err: &(dyn Error + 'static), status: StatusCode) -> String {
        if self.config.redact_internal && status == StatusCode::INTERNAL_SERVER_ERROR {
            INTERNAL_SERVER_ERROR.to_owned()
        } else {
            err.to_string()
        }
    }
}

/// [`DataResponder::success`] with the default policy
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn success<C, T>(ctx: &mut C, status: StatusCode, data: T) -> Result<(), C::Error>
where
    C: ResponseContext,
    T: Serialize,
{
    DataResponder::default().success(ctx, status, data)
}

/// [`DataResponder::error`] with the default policy
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn error<C: ResponseContext>(
    ctx: &mut C,
    err: &(dyn Error + 'static),
    message: Option<&str>,
) -> Result<(), C::Error> {
    DataResponder::default().error(ctx, err, message)
}

/// [`DataResponder::errors`] with the default policy
///
/// # Errors
///
/// Returns the context's write failure unchanged
pub fn errors<C: ResponseContext>(ctx: &mut C, errs: &[&(dyn Error + 'static)]) -> Result<(), C::Error> {
    DataResponder::default().errors(ctx, errs)
}
