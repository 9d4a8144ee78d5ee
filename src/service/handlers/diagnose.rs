//! Symptom-based diagnosis endpoint

use axum::{extract::State, http::StatusCode, response::Json};

use crate::service::{
    handlers::error_reply,
    server::AppState,
    types::{DiagnoseRequest, DiagnoseResponse, ErrorResponse, ServiceError},
};

/// `POST /api/diagnose` — canned diagnosis from a symptom list
///
/// The body must carry a non-empty `symptoms` list; an empty or missing
/// list is answered with 400. Symptom matching is case-insensitive.
pub async fn diagnose(
    State(_state): State<AppState>,
    Json(request): Json<DiagnoseRequest>,
) -> Result<Json<DiagnoseResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.symptoms.is_empty() {
        return Err(error_reply(ServiceError::BadRequest(
            "JSON body must contain a non-empty 'symptoms' list".to_string(),
        )));
    }

    let diagnosis = diagnose_symptoms(&request.symptoms);
    Ok(Json(DiagnoseResponse {
        symptoms: request.symptoms,
        diagnosis,
    }))
}

fn has_symptom(symptoms: &[String], name: &str) -> bool {
    symptoms.iter().any(|s| s.trim().eq_ignore_ascii_case(name))
}

/// Canned symptom-to-diagnosis mapping
fn diagnose_symptoms(symptoms: &[String]) -> String {
    if has_symptom(symptoms, "fever") && has_symptom(symptoms, "cough") {
        "You may have the flu or COVID-19.".to_string()
    } else if has_symptom(symptoms, "headache") {
        "It might be a migraine or tension headache.".to_string()
    } else {
        "No matching diagnosis found. Please consult a doctor.".to_string()
    }
}
