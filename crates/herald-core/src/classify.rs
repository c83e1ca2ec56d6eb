use std::error::Error;

use http::StatusCode;

use crate::AppError;

/// Find the first [`AppError`] in an error's source chain
///
/// Checks `err` itself first, then each `source()` in turn.
pub fn find_app_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a AppError> {
    std::iter::successors(Some(err), |&current| current.source())
        .find_map(|current| current.downcast_ref::<AppError>())
}

/// Resolve the HTTP status code for any error
///
/// An [`AppError`] anywhere in the chain decides the status through
/// [`ErrorCode::status_code`](crate::ErrorCode::status_code). Every other
/// error is a 500.
pub fn http_status(err: &(dyn Error + 'static)) -> StatusCode {
    find_app_error(err).map_or(StatusCode::INTERNAL_SERVER_ERROR, |app| app.code().status_code())
}
