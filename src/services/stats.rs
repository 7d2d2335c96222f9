use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::queries;
use crate::models::SalonCatalog;

/// Dashboard figures for "now": today's bookings and revenue, plus the
/// running totals for the current calendar month.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub bookings_today: i64,
    pub revenue_today: f64,
    pub month_expenses: f64,
    pub low_stock_items: i64,
    pub active_employees: i64,
    pub month_profit: f64,
}

/// Builds the dashboard summary from confirmed bookings, recorded expenses,
/// inventory levels, and staff status. Cancelled bookings never count.
/// Revenue is priced from the catalog at read time, so a price change
/// re-prices history.
pub fn summary(conn: &Connection, catalog: &SalonCatalog) -> anyhow::Result<Summary> {
    let today = Utc::now().date_naive();
    let month = today.format("%Y-%m").to_string();

    let bookings_today = queries::confirmed_services_on(conn, today)?;
    let revenue_today = price_total(catalog, &bookings_today);

    let month_revenue = price_total(catalog, &queries::confirmed_services_in_month(conn, &month)?);
    let counts = queries::summary_counts(conn, &month)?;

    Ok(Summary {
        bookings_today: bookings_today.len() as i64,
        revenue_today,
        month_expenses: counts.month_expenses,
        low_stock_items: counts.low_stock_items,
        active_employees: counts.active_employees,
        month_profit: month_revenue - counts.month_expenses,
    })
}

/// Sums catalog prices over a list of service names. Names missing from the
/// catalog contribute nothing rather than failing the whole summary.
fn price_total(catalog: &SalonCatalog, services: &[String]) -> f64 {
    services
        .iter()
        .filter_map(|name| catalog.service_price(name))
        .sum()
}
