//! HTTP adapter mapping for domain errors.
//!
//! Client errors are returned as JSON. Server errors carry no body at all so
//! storage failures never leak to clients; the trace id header still links
//! the response to the logged cause.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if status.is_server_error() {
            error!(
                code = ?self.code(),
                message = self.message(),
                trace_id = self.trace_id().unwrap_or("none"),
                "request failed"
            );
            builder.finish()
        } else {
            builder.json(self)
        }
    }
}
