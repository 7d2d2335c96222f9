use axum::Json;

// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

// GET /api/
pub async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "API Peluquería funcionando correctamente"}))
}
