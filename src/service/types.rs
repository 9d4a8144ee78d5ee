//! Request and response types for the intake web service

use crate::annotation::AnnotationReport;
use crate::notation::breakdown::VariantBreakdown;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service-level error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Submission blocked: no well-formed variant notation
    #[error("Invalid variant notation: {0}")]
    InvalidNotation(String),

    /// Upstream inference/storage backend failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::InvalidNotation(_) => 422,
            ServiceError::Upstream(_) => 502,
            ServiceError::ConfigError(_) => 500,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Convert to a wire error response
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::InvalidNotation(_) => "invalid_notation",
            ServiceError::Upstream(_) => "upstream_error",
            ServiceError::ConfigError(_) => "config_error",
            ServiceError::Internal(_) => "internal_error",
        };
        ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
        }
    }
}

/// Wire error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error category
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// Request for notation extraction or validation
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    /// Free-form text to scan, exactly as typed
    pub text: String,
}

/// Response for `/api/v1/extract`
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// Whether a well-formed notation was found
    pub matched: bool,
    /// Structured breakdown of the first match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<VariantBreakdown>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Response for `/api/v1/validate`
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Whether the input may proceed to the next intake stage
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<VariantBreakdown>,
    /// Remediation text when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response for a gated intake submission
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    /// Breakdown of the submitted variant notation
    pub breakdown: VariantBreakdown,
    /// Annotation report from the inference backend (or built-in payload)
    pub report: AnnotationReport,
}

/// Request for `/api/diagnose`
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnoseRequest {
    /// Reported symptoms; a missing field reads as empty and is rejected
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Response for `/api/diagnose`
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    /// The symptoms echoed back as submitted
    pub symptoms: Vec<String>,
    /// Canned diagnosis text
    pub diagnosis: String,
}

/// Response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Response for `/api/v1/info`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}
