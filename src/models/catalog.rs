use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One entry of the service catalog. Duration is informational only; it does
/// not widen the slot a booking occupies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
}

/// Opening window for one weekday. Invariant: `open < close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Weekday → opening hours. Closed days are absent from the map, never
/// present with an empty range.
#[derive(Debug, Clone, Default)]
pub struct WeeklyHours {
    days: HashMap<Weekday, DayHours>,
}

impl WeeklyHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, day: Weekday, open: NaiveTime, close: NaiveTime) {
        debug_assert!(open < close, "opening hours must satisfy open < close");
        self.days.insert(day, DayHours { open, close });
    }

    pub fn for_day(&self, day: Weekday) -> Option<&DayHours> {
        self.days.get(&day)
    }

    pub fn is_open(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }
}

/// Fixed salon configuration: who works here, what they do, and when the
/// shop is open. Built once at startup and handed to the scheduling code by
/// reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct SalonCatalog {
    pub stylists: Vec<String>,
    pub services: Vec<Service>,
    pub hours: WeeklyHours,
}

impl SalonCatalog {
    /// The built-in configuration: three stylists, six services, open
    /// Monday–Friday 10:00–19:00 and Saturday 10:00–14:00, closed Sunday.
    pub fn builtin() -> Self {
        let stylists = vec![
            "Andrés".to_string(),
            "Alejandro".to_string(),
            "Adrián".to_string(),
        ];

        let services = vec![
            service("Corte de cabello", 30, 15.0),
            service("Arreglo de barba", 20, 10.0),
            service("Tinte", 90, 45.0),
            service("Corte mujer", 45, 25.0),
            service("Peinado", 30, 20.0),
            service("Mechas", 120, 60.0),
        ];

        let mut hours = WeeklyHours::new();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            hours.set(day, hm(10, 0), hm(19, 0));
        }
        hours.set(Weekday::Sat, hm(10, 0), hm(14, 0));

        Self {
            stylists,
            services,
            hours,
        }
    }

    pub fn has_stylist(&self, name: &str) -> bool {
        self.stylists.iter().any(|s| s == name)
    }

    pub fn has_service(&self, name: &str) -> bool {
        self.services.iter().any(|s| s.name == name)
    }

    pub fn service_price(&self, name: &str) -> Option<f64> {
        self.services.iter().find(|s| s.name == name).map(|s| s.price)
    }
}

fn service(name: &str, duration_minutes: u32, price: f64) -> Service {
    Service {
        name: name.to_string(),
        duration_minutes,
        price,
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("time literal out of range")
}
