//! Integration tests for web service endpoints
//!
//! Handlers are exercised directly rather than over HTTP, which keeps the
//! test dependencies down while still covering the request/response logic.

#![cfg(feature = "web-service")]

use axum::extract::{Json, State};
use chrono::NaiveDate;

use hgvs_intake::intake::{
    GeneticInput, GenomeBuild, IntakeAction, IntakeForm, PatientInfo, Sex, EXAMPLE_SUBSTITUTION,
};
use hgvs_intake::service::handlers;
use hgvs_intake::service::types::{DiagnoseRequest, ExtractRequest};
use hgvs_intake::service::{create_app, AppState, ServiceConfig};

fn test_state() -> AppState {
    AppState::new(ServiceConfig::default()).unwrap()
}

fn sample_form(notation: &str) -> IntakeForm {
    IntakeForm {
        patient: PatientInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 2),
            sex: Sex::Female,
            ethnicity: None,
        },
        genome_build: GenomeBuild::Grch38,
        input: GeneticInput::Sequence {
            text: "ACGT".to_string(),
        },
        action: IntakeAction::Diagnose,
        variant_notation: notation.to_string(),
    }
}

#[test]
fn test_create_app_with_defaults() {
    let (_, state) = create_app(ServiceConfig::default()).unwrap();
    assert_eq!(state.config.server.port, 5000);
}

#[tokio::test]
async fn test_extract_endpoint_matched() {
    let request = ExtractRequest {
        text: format!("clinician note: {}", EXAMPLE_SUBSTITUTION),
    };
    let Json(response) =
        handlers::extract::extract_single(State(test_state()), Json(request)).await;

    assert!(response.matched);
    let breakdown = response.breakdown.unwrap();
    assert_eq!(breakdown.gene, "HFE");
    assert_eq!(breakdown.cdna, "c.989G>T");
}

#[tokio::test]
async fn test_extract_endpoint_no_match_is_not_an_error() {
    let request = ExtractRequest {
        text: "no notation in here".to_string(),
    };
    let Json(response) =
        handlers::extract::extract_single(State(test_state()), Json(request)).await;

    assert!(!response.matched);
    assert!(response.breakdown.is_none());
}

#[tokio::test]
async fn test_validate_endpoint_returns_remediation() {
    let request = ExtractRequest {
        text: "c.989G>T".to_string(),
    };
    let Json(response) =
        handlers::extract::validate_single(State(test_state()), Json(request)).await;

    assert!(!response.valid);
    assert!(response.breakdown.is_none());
    let message = response.message.unwrap();
    assert!(message.contains(EXAMPLE_SUBSTITUTION));
}

#[tokio::test]
async fn test_validate_endpoint_accepts_well_formed() {
    let request = ExtractRequest {
        text: EXAMPLE_SUBSTITUTION.to_string(),
    };
    let Json(response) =
        handlers::extract::validate_single(State(test_state()), Json(request)).await;

    assert!(response.valid);
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_intake_submission_accepted() {
    // No upstreams configured: storage is skipped and the built-in
    // annotation payload is served
    let result = handlers::intake::intake_submit(
        State(test_state()),
        Json(sample_form(EXAMPLE_SUBSTITUTION)),
    )
    .await;

    let Json(response) = result.unwrap();
    assert_eq!(response.breakdown.gene, "HFE");
    assert!(response.report.genome_variation.contains("BRCA1"));
}

#[tokio::test]
async fn test_intake_submission_rejected_with_422() {
    let result = handlers::intake::intake_submit(
        State(test_state()),
        Json(sample_form("not a variant")),
    )
    .await;

    let (status, Json(body)) = result.unwrap_err();
    assert_eq!(status.as_u16(), 422);
    assert_eq!(body.error, "invalid_notation");
    assert!(body.message.contains(EXAMPLE_SUBSTITUTION));
}

#[tokio::test]
async fn test_search_serves_builtin_payload_without_upstream() {
    let result = handlers::annotate::search(State(test_state())).await;
    let Json(report) = result.unwrap();
    assert_eq!(report.sources[0].metadata.gene_symbol, "BRCA1");
}

#[tokio::test]
async fn test_diagnose_returns_canned_diagnosis() {
    let request = DiagnoseRequest {
        symptoms: vec!["fever".to_string(), "cough".to_string()],
    };
    let result = handlers::diagnose::diagnose(State(test_state()), Json(request)).await;

    let Json(response) = result.unwrap();
    assert_eq!(response.symptoms, vec!["fever", "cough"]);
    assert!(response.diagnosis.contains("flu"));
}

#[tokio::test]
async fn test_diagnose_rejects_empty_symptom_list() {
    let request = DiagnoseRequest { symptoms: vec![] };
    let result = handlers::diagnose::diagnose(State(test_state()), Json(request)).await;

    let (status, Json(body)) = result.unwrap_err();
    assert_eq!(status.as_u16(), 400);
    assert_eq!(body.error, "bad_request");
    assert!(body.message.contains("symptoms"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let Json(response) = handlers::health::health_check().await;
    assert_eq!(response.status, "ok");
    assert!(!response.version.is_empty());
}

#[tokio::test]
async fn test_info_lists_endpoints() {
    let Json(response) = handlers::info::service_info().await;
    assert!(response
        .endpoints
        .iter()
        .any(|e| e.contains("/api/v1/intake")));
}
