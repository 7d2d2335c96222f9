use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking, SalonCatalog};

/// Slot stride. Every service occupies exactly one slot regardless of its
/// catalog duration.
pub const SLOT_MINUTES: i64 = 30;

#[derive(Debug)]
pub enum BookingError {
    UnknownStylist,
    UnknownService,
    InvalidDate,
    InvalidTime,
    SlotUnavailable,
    Storage(anyhow::Error),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::UnknownStylist => write!(f, "invalid stylist"),
            BookingError::UnknownService => write!(f, "invalid service"),
            BookingError::InvalidDate => write!(f, "invalid date"),
            BookingError::InvalidTime => write!(f, "invalid time"),
            BookingError::SlotUnavailable => write!(f, "slot unavailable"),
            BookingError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::UnknownStylist
            | BookingError::UnknownService
            | BookingError::InvalidDate
            | BookingError::InvalidTime => AppError::InvalidInput(err.to_string()),
            BookingError::SlotUnavailable => AppError::SlotUnavailable(err.to_string()),
            BookingError::Storage(e) => AppError::Internal(e),
        }
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| BookingError::InvalidDate)
}

pub fn parse_time(s: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| BookingError::InvalidTime)
}

/// Free slot starts for one stylist on one date, ascending.
///
/// Candidates run from the day's opening time in 30-minute steps while
/// strictly before closing, so a trailing interval shorter than a full slot
/// is never offered. Starts already taken by a confirmed booking for the
/// same (date, stylist) are removed. A day absent from the weekly hours
/// table is closed and yields no slots.
pub fn available_slots(
    conn: &Connection,
    catalog: &SalonCatalog,
    date: NaiveDate,
    stylist: &str,
) -> anyhow::Result<Vec<NaiveTime>> {
    let Some(hours) = catalog.hours.for_day(date.weekday()) else {
        return Ok(vec![]);
    };

    let taken = queries::booked_times(conn, date, stylist)?;

    let mut slots = vec![];
    let mut current = hours.open;
    while current < hours.close {
        if !taken.contains(&current) {
            slots.push(current);
        }
        // NaiveTime addition wraps at midnight; stop instead of cycling.
        let (next, wrapped) = current.overflowing_add_signed(Duration::minutes(SLOT_MINUTES));
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    Ok(slots)
}

/// Validates a booking request and persists it as confirmed.
///
/// Checks run in order and the first failure wins: stylist, service, date
/// and time syntax, then slot availability (which doubles as the
/// double-booking guard). Nothing is written on any rejection path; on
/// success exactly one row is inserted and the stamped record returned.
pub fn create_booking(
    conn: &Connection,
    catalog: &SalonCatalog,
    candidate: NewBooking,
) -> Result<Booking, BookingError> {
    if !catalog.has_stylist(&candidate.stylist) {
        return Err(BookingError::UnknownStylist);
    }
    if !catalog.has_service(&candidate.service) {
        return Err(BookingError::UnknownService);
    }

    let date = parse_date(&candidate.date)?;
    let time = parse_time(&candidate.time)?;

    let open = available_slots(conn, catalog, date, &candidate.stylist)
        .map_err(BookingError::Storage)?;
    if !open.contains(&time) {
        return Err(BookingError::SlotUnavailable);
    }

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        client_name: candidate.client_name,
        client_phone: candidate.client_phone,
        client_email: candidate.client_email,
        service: candidate.service,
        stylist: candidate.stylist,
        date,
        time,
        status: BookingStatus::Confirmed,
        created_at: Utc::now().naive_utc(),
    };

    // The partial unique index on (date, stylist, time) is the authoritative
    // guard; a violation here means another confirmed row took the slot
    // after the availability check above.
    if let Err(e) = queries::insert_booking(conn, &booking) {
        if is_unique_violation(&e) {
            return Err(BookingError::SlotUnavailable);
        }
        return Err(BookingError::Storage(e));
    }

    Ok(booking)
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
