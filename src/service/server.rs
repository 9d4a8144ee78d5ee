//! Web server setup using Axum framework

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::service::{
    config::ServiceConfig,
    handlers,
    types::{ErrorResponse, ServiceError},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// Client for upstream inference/storage requests
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state from a validated configuration
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_seconds))
            .build()
            .map_err(|e| ServiceError::ConfigError(format!("HTTP client: {}", e)))?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

/// Create the Axum application with all routes and middleware
pub fn create_app(config: ServiceConfig) -> Result<(Router, AppState), ServiceError> {
    let max_size = parse_size(&config.server.max_request_size)
        .map_err(|e| ServiceError::ConfigError(format!("Invalid max_request_size: {}", e)))?;

    let state = AppState::new(config)?;

    let app = Router::new()
        // Health and info
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/info", get(handlers::info::service_info))
        // Notation endpoints
        .route("/api/v1/extract", post(handlers::extract::extract_single))
        .route("/api/v1/validate", post(handlers::extract::validate_single))
        // Gated intake submission
        .route("/api/v1/intake", post(handlers::intake::intake_submit))
        // Backend-compatible endpoints, same paths as the service they replace
        .route("/api/search", get(handlers::annotate::search))
        .route("/api/diagnose", post(handlers::diagnose::diagnose))
        .fallback(handle_404)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(max_size));

    Ok((app, state))
}

/// Handle 404 errors
async fn handle_404() -> (StatusCode, Json<ErrorResponse>) {
    let error = ServiceError::BadRequest("Endpoint not found".to_string());
    (StatusCode::NOT_FOUND, Json(error.to_response()))
}

/// Parse a human-readable size such as "10MB" into a byte count
///
/// A bare number is taken as bytes. The multiplied result must fit in
/// `usize`.
fn parse_size(input: &str) -> Result<usize, String> {
    let normalized = input.trim().to_uppercase();

    // Longer suffixes first, so "MB" is not read as a stray "B"
    let (digits, multiplier): (&str, usize) = if let Some(n) = normalized.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = normalized.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = normalized.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = normalized.strip_suffix('B') {
        (n, 1)
    } else {
        (normalized.as_str(), 1)
    };

    let value: usize = digits
        .parse()
        .map_err(|_| format!("Invalid size format: {}", input))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size out of range: {}", input))
}
