//! Annotation endpoint
//!
//! Proxies annotation requests to the configured inference backend; when no
//! backend is configured the built-in payload is served instead. A single
//! upstream attempt is made per request with the configured timeout.

use axum::{extract::State, http::StatusCode, response::Json};

use crate::annotation::AnnotationReport;
use crate::service::{
    handlers::error_reply,
    server::AppState,
    types::{ErrorResponse, ServiceError},
};

/// `GET /api/search` — fetch the annotation report for the current submission
pub async fn search(
    State(state): State<AppState>,
) -> Result<Json<AnnotationReport>, (StatusCode, Json<ErrorResponse>)> {
    fetch_report(&state).await.map(Json).map_err(error_reply)
}

/// Fetch an annotation report from the inference upstream or the built-in payload
pub(crate) async fn fetch_report(state: &AppState) -> Result<AnnotationReport, ServiceError> {
    match &state.config.upstream.inference_url {
        Some(url) => {
            tracing::debug!("proxying annotation request to {}", url);
            let response = state
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| ServiceError::Upstream(e.to_string()))?;

            if !response.status().is_success() {
                return Err(ServiceError::Upstream(format!(
                    "inference backend returned {}",
                    response.status()
                )));
            }

            response
                .json::<AnnotationReport>()
                .await
                .map_err(|e| ServiceError::Upstream(format!("invalid annotation payload: {}", e)))
        }
        None => {
            tracing::debug!("no inference upstream configured, serving built-in payload");
            Ok(AnnotationReport::mock())
        }
    }
}
