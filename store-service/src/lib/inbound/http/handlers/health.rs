use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

pub async fn health() -> (StatusCode, Json<HealthResponseBody>) {
    (
        StatusCode::OK,
        Json(HealthResponseBody {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponseBody {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
