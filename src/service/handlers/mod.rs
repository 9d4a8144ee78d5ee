//! HTTP handlers for the intake web service

pub mod annotate;
pub mod diagnose;
pub mod extract;
pub mod health;
pub mod info;
pub mod intake;

use crate::service::types::{ErrorResponse, ServiceError};
use axum::{http::StatusCode, response::Json};

/// Convert a service error into an HTTP reply tuple
pub(crate) fn error_reply(error: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(error.to_response()),
    )
}
