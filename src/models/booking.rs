use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub service: String,
    pub stylist: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

/// Booking payload as submitted by the client. Date and time arrive as raw
/// strings; the booking validator owns parsing so malformed values get a
/// proper rejection instead of a generic body-decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub service: String,
    pub stylist: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Confirmed,
        }
    }
}
