use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::Service;
use crate::services::scheduling;
use crate::state::AppState;

// GET /api/services
pub async fn get_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.catalog.services.clone())
}

// GET /api/stylists
pub async fn get_stylists(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.stylists.clone())
}

// GET /api/available-slots/:date/:stylist
pub async fn get_available_slots(
    State(state): State<Arc<AppState>>,
    Path((date, stylist)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, AppError> {
    if !state.catalog.has_stylist(&stylist) {
        return Err(scheduling::BookingError::UnknownStylist.into());
    }
    let date = scheduling::parse_date(&date)?;

    let slots = {
        let db = state.db.lock().unwrap();
        scheduling::available_slots(&db, &state.catalog, date, &stylist)?
    };

    Ok(Json(
        slots.iter().map(|t| t.format("%H:%M").to_string()).collect(),
    ))
}
