use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};
use crate::services::scheduling;
use crate::state::AppState;

/// Wire shape of a booking. Dates and times go out as the same strings
/// clients send in.
#[derive(Serialize)]
pub struct BookingResponse {
    id: String,
    client_name: String,
    client_phone: String,
    client_email: Option<String>,
    service: String,
    stylist: String,
    date: String,
    time: String,
    status: String,
    created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            client_name: b.client_name,
            client_phone: b.client_phone,
            client_email: b.client_email,
            service: b.service,
            stylist: b.stylist,
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time.format("%H:%M").to_string(),
            status: b.status.as_str().to_string(),
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBooking>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = {
        let db = state.db.lock().unwrap();
        scheduling::create_booking(&db, &state.catalog, body)?
    };

    tracing::info!(
        id = %booking.id,
        stylist = %booking.stylist,
        date = %booking.date,
        time = %booking.time.format("%H:%M"),
        "booking created"
    );
    Ok(Json(booking.into()))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub date: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = {
        let db = state.db.lock().unwrap();
        match query.date.as_deref() {
            Some(raw) => {
                let date = scheduling::parse_date(raw)?;
                queries::bookings_for_date(&db, date)?
            }
            None => queries::list_bookings(&db)?,
        }
    };

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

// DELETE /api/bookings/:id
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_booking_status(&db, &id, BookingStatus::Cancelled)?
    };

    if !matched {
        return Err(AppError::NotFound("booking".to_string()));
    }

    tracing::info!(id = %id, "booking cancelled");
    Ok(Json(serde_json::json!({"ok": true})))
}
