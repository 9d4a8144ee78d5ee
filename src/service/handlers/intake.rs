//! Gated intake submission endpoint

use axum::{extract::State, http::StatusCode, response::Json};

use crate::intake::IntakeForm;
use crate::service::{
    handlers::{annotate, error_reply},
    server::AppState,
    types::{ErrorResponse, IntakeResponse, ServiceError},
};

/// Submit an intake form
///
/// The submission is gated on the variant-notation extractor: a form whose
/// notation text contains no well-formed variant description is rejected with
/// 422 and the remediation message. Accepted submissions are forwarded to the
/// storage backend (when configured) and answered with the annotation report.
pub async fn intake_submit(
    State(state): State<AppState>,
    Json(form): Json<IntakeForm>,
) -> Result<Json<IntakeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let breakdown = form
        .validate()
        .map_err(|rejection| error_reply(ServiceError::InvalidNotation(rejection.message)))?;

    forward_to_storage(&state, &form).await;

    let report = annotate::fetch_report(&state).await.map_err(error_reply)?;

    Ok(Json(IntakeResponse { breakdown, report }))
}

/// Forward an accepted intake record to the storage backend, if configured
///
/// Storage is best-effort in this demo flow: a failure is logged and does not
/// block the submission.
async fn forward_to_storage(state: &AppState, form: &IntakeForm) {
    let Some(url) = &state.config.upstream.storage_url else {
        return;
    };

    match state.http.post(url).json(form).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::debug!("intake record forwarded to storage");
        }
        Ok(response) => {
            tracing::warn!("storage backend returned {}", response.status());
        }
        Err(e) => {
            tracing::warn!("failed to reach storage backend: {}", e);
        }
    }
}
