//! Notation extraction and validation endpoints

use axum::{extract::State, response::Json};
use std::time::Instant;

use crate::intake::remediation_message;
use crate::notation::parser::extract;
use crate::service::{
    server::AppState,
    types::{ExtractRequest, ExtractResponse, ValidateResponse},
};

/// Extract the first variant notation from free text
///
/// A no-match is a normal negative result, not an error: the response carries
/// `matched: false` with no breakdown.
pub async fn extract_single(
    State(_state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let start = Instant::now();
    let breakdown = extract(&request.text);
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Json(ExtractResponse {
        matched: breakdown.is_some(),
        breakdown,
        processing_time_ms: elapsed_ms,
    })
}

/// Validate intake text, returning remediation guidance when it is rejected
pub async fn validate_single(
    State(_state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ValidateResponse> {
    match extract(&request.text) {
        Some(breakdown) => Json(ValidateResponse {
            valid: true,
            breakdown: Some(breakdown),
            message: None,
        }),
        None => Json(ValidateResponse {
            valid: false,
            breakdown: None,
            message: Some(remediation_message()),
        }),
    }
}
