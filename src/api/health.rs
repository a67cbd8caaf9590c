use axum::{extract::State, Json};
use serde::Serialize;
use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
    pub llm_provider: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = if state.db.ping().await {
        "connected".to_string()
    } else {
        "disconnected".to_string()
    };

    let llm_status = if state.config.has_llm_provider() {
        "configured".to_string()
    } else {
        "missing".to_string()
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        llm_provider: llm_status,
    })
}
