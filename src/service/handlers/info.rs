//! Service info endpoint

use axum::response::Json;

use crate::service::types::InfoResponse;

/// `GET /api/v1/info`
pub async fn service_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "hgvs-intake".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/v1/info".to_string(),
            "/api/v1/extract".to_string(),
            "/api/v1/validate".to_string(),
            "/api/v1/intake".to_string(),
            "/api/search".to_string(),
            "/api/diagnose".to_string(),
        ],
    })
}
