use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::services::stats::{self, Summary};
use crate::state::AppState;

// GET /api/stats/summary
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Result<Json<Summary>, AppError> {
    let summary = {
        let db = state.db.lock().unwrap();
        stats::summary(&db, &state.catalog)?
    };
    Ok(Json(summary))
}
