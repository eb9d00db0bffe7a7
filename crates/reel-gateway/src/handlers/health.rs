use crate::model::HealthResponse;
use axum::Json;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn go_handler() -> &'static str {
    "Good Luck!"
}
