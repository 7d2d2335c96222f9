use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{
    Booking, BookingStatus, Employee, EmployeeStatus, Expense, InventoryItem, NewEmployee,
    NewExpense, NewInventoryItem, NewSupplier, Supplier,
};

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M";
const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ── Bookings ──

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, client_name, client_phone, client_email, service, stylist, date, time, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            booking.id,
            booking.client_name,
            booking.client_phone,
            booking.client_email,
            booking.service,
            booking.stylist,
            booking.date.format(DATE_FMT).to_string(),
            booking.time.format(TIME_FMT).to_string(),
            booking.status.as_str(),
            booking.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Slot starts already taken by a confirmed booking for this date/stylist.
pub fn booked_times(
    conn: &Connection,
    date: NaiveDate,
    stylist: &str,
) -> anyhow::Result<Vec<NaiveTime>> {
    let mut stmt = conn.prepare(
        "SELECT time FROM bookings
         WHERE date = ?1 AND stylist = ?2 AND status = 'confirmed'
         ORDER BY time ASC",
    )?;

    let date_str = date.format(DATE_FMT).to_string();
    let rows = stmt.query_map(params![date_str, stylist], |row| row.get::<_, String>(0))?;

    let mut times = vec![];
    for row in rows {
        if let Ok(t) = NaiveTime::parse_from_str(&row?, TIME_FMT) {
            times.push(t);
        }
    }
    Ok(times)
}

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, client_name, client_phone, client_email, service, stylist, date, time, status, created_at
         FROM bookings ORDER BY date ASC, time ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn bookings_for_date(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, client_name, client_phone, client_email, service, stylist, date, time, status, created_at
         FROM bookings WHERE date = ?1 ORDER BY time ASC",
    )?;

    let date_str = date.format(DATE_FMT).to_string();
    let rows = stmt.query_map(params![date_str], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, client_name, client_phone, client_email, service, stylist, date, time, status, created_at
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: BookingStatus,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let client_name: String = row.get(1)?;
    let client_phone: String = row.get(2)?;
    let client_email: Option<String> = row.get(3)?;
    let service: String = row.get(4)?;
    let stylist: String = row.get(5)?;
    let date_str: String = row.get(6)?;
    let time_str: String = row.get(7)?;
    let status_str: String = row.get(8)?;
    let created_at_str: String = row.get(9)?;

    let date =
        NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_else(|_| Utc::now().date_naive());
    let time = NaiveTime::parse_from_str(&time_str, TIME_FMT).unwrap_or(NaiveTime::MIN);
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        client_name,
        client_phone,
        client_email,
        service,
        stylist,
        date,
        time,
        status: BookingStatus::parse(&status_str),
        created_at,
    })
}

// ── Suppliers ──

pub fn insert_supplier(conn: &Connection, supplier: &Supplier) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO suppliers (id, name, contact, phone, email, address, category, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            supplier.id,
            supplier.name,
            supplier.contact,
            supplier.phone,
            supplier.email,
            supplier.address,
            supplier.category,
            supplier.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_suppliers(conn: &Connection) -> anyhow::Result<Vec<Supplier>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, contact, phone, email, address, category, created_at
         FROM suppliers ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Supplier {
            id: row.get(0)?,
            name: row.get(1)?,
            contact: row.get(2)?,
            phone: row.get(3)?,
            email: row.get(4)?,
            address: row.get(5)?,
            category: row.get(6)?,
            created_at: parse_datetime(row.get::<_, String>(7)?),
        })
    })?;

    let mut suppliers = vec![];
    for row in rows {
        suppliers.push(row?);
    }
    Ok(suppliers)
}

pub fn update_supplier(conn: &Connection, id: &str, fields: &NewSupplier) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE suppliers SET name = ?1, contact = ?2, phone = ?3, email = ?4, address = ?5, category = ?6
         WHERE id = ?7",
        params![
            fields.name,
            fields.contact,
            fields.phone,
            fields.email,
            fields.address,
            fields.category,
            id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_supplier(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM suppliers WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

// ── Expenses ──

pub fn insert_expense(conn: &Connection, expense: &Expense) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO expenses (id, concept, category, amount, date, supplier_id, description, payment_method, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            expense.id,
            expense.concept,
            expense.category,
            expense.amount,
            expense.date.format(DATE_FMT).to_string(),
            expense.supplier_id,
            expense.description,
            expense.payment_method,
            expense.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_expenses(conn: &Connection) -> anyhow::Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, concept, category, amount, date, supplier_id, description, payment_method, created_at
         FROM expenses ORDER BY date DESC, created_at DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Expense {
            id: row.get(0)?,
            concept: row.get(1)?,
            category: row.get(2)?,
            amount: row.get(3)?,
            date: parse_date(row.get::<_, String>(4)?),
            supplier_id: row.get(5)?,
            description: row.get(6)?,
            payment_method: row.get(7)?,
            created_at: parse_datetime(row.get::<_, String>(8)?),
        })
    })?;

    let mut expenses = vec![];
    for row in rows {
        expenses.push(row?);
    }
    Ok(expenses)
}

pub fn update_expense(conn: &Connection, id: &str, fields: &NewExpense) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE expenses SET concept = ?1, category = ?2, amount = ?3, date = ?4, supplier_id = ?5, description = ?6, payment_method = ?7
         WHERE id = ?8",
        params![
            fields.concept,
            fields.category,
            fields.amount,
            fields.date.format(DATE_FMT).to_string(),
            fields.supplier_id,
            fields.description,
            fields.payment_method,
            id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_expense(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

// ── Inventory ──

pub fn insert_inventory_item(conn: &Connection, item: &InventoryItem) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO inventory (id, name, category, stock, min_stock, purchase_price, sale_price, supplier_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            item.id,
            item.name,
            item.category,
            item.stock,
            item.min_stock,
            item.purchase_price,
            item.sale_price,
            item.supplier_id,
            item.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_inventory(conn: &Connection) -> anyhow::Result<Vec<InventoryItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, category, stock, min_stock, purchase_price, sale_price, supplier_id, created_at
         FROM inventory ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(InventoryItem {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            stock: row.get(3)?,
            min_stock: row.get(4)?,
            purchase_price: row.get(5)?,
            sale_price: row.get(6)?,
            supplier_id: row.get(7)?,
            created_at: parse_datetime(row.get::<_, String>(8)?),
        })
    })?;

    let mut items = vec![];
    for row in rows {
        items.push(row?);
    }
    Ok(items)
}

pub fn update_inventory_item(
    conn: &Connection,
    id: &str,
    fields: &NewInventoryItem,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE inventory SET name = ?1, category = ?2, stock = ?3, min_stock = ?4, purchase_price = ?5, sale_price = ?6, supplier_id = ?7
         WHERE id = ?8",
        params![
            fields.name,
            fields.category,
            fields.stock,
            fields.min_stock,
            fields.purchase_price,
            fields.sale_price,
            fields.supplier_id,
            id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_inventory_item(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM inventory WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

// ── Employees ──

pub fn insert_employee(conn: &Connection, employee: &Employee) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO employees (id, name, phone, email, position, salary, hired_on, schedule, commission_pct, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            employee.id,
            employee.name,
            employee.phone,
            employee.email,
            employee.position,
            employee.salary,
            employee.hired_on.map(|d| d.format(DATE_FMT).to_string()),
            employee.schedule,
            employee.commission_pct,
            employee.status.as_str(),
            employee.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_employees(conn: &Connection) -> anyhow::Result<Vec<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, phone, email, position, salary, hired_on, schedule, commission_pct, status, created_at
         FROM employees ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
            position: row.get(4)?,
            salary: row.get(5)?,
            hired_on: row
                .get::<_, Option<String>>(6)?
                .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
            schedule: row.get(7)?,
            commission_pct: row.get(8)?,
            status: EmployeeStatus::parse(&row.get::<_, String>(9)?),
            created_at: parse_datetime(row.get::<_, String>(10)?),
        })
    })?;

    let mut employees = vec![];
    for row in rows {
        employees.push(row?);
    }
    Ok(employees)
}

pub fn update_employee(conn: &Connection, id: &str, fields: &NewEmployee) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE employees SET name = ?1, phone = ?2, email = ?3, position = ?4, salary = ?5, hired_on = ?6, schedule = ?7, commission_pct = ?8
         WHERE id = ?9",
        params![
            fields.name,
            fields.phone,
            fields.email,
            fields.position,
            fields.salary,
            fields.hired_on.map(|d| d.format(DATE_FMT).to_string()),
            fields.schedule,
            fields.commission_pct,
            id,
        ],
    )?;
    Ok(count > 0)
}

/// Soft delete: the row stays for payroll history.
pub fn deactivate_employee(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE employees SET status = 'inactive' WHERE id = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

// ── Dashboard ──

pub struct SummaryCounts {
    pub month_expenses: f64,
    pub low_stock_items: i64,
    pub active_employees: i64,
}

pub fn summary_counts(conn: &Connection, month: &str) -> anyhow::Result<SummaryCounts> {
    let month_expenses: f64 = conn
        .query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE date LIKE ?1",
            params![format!("{month}-%")],
            |row| row.get(0),
        )
        .unwrap_or(0.0);

    let low_stock_items: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM inventory WHERE stock <= min_stock",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let active_employees: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM employees WHERE status = 'active'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(SummaryCounts {
        month_expenses,
        low_stock_items,
        active_employees,
    })
}

/// Service names of confirmed bookings on one date, one entry per booking.
pub fn confirmed_services_on(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT service FROM bookings WHERE date = ?1 AND status = 'confirmed'")?;

    let date_str = date.format(DATE_FMT).to_string();
    let rows = stmt.query_map(params![date_str], |row| row.get::<_, String>(0))?;

    let mut services = vec![];
    for row in rows {
        services.push(row?);
    }
    Ok(services)
}

/// Same as `confirmed_services_on` but across a whole `YYYY-MM` month.
pub fn confirmed_services_in_month(conn: &Connection, month: &str) -> anyhow::Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT service FROM bookings WHERE date LIKE ?1 AND status = 'confirmed'")?;

    let rows = stmt.query_map(params![format!("{month}-%")], |row| {
        row.get::<_, String>(0)
    })?;

    let mut services = vec![];
    for row in rows {
        services.push(row?);
    }
    Ok(services)
}

fn parse_date(s: String) -> NaiveDate {
    NaiveDate::parse_from_str(&s, DATE_FMT).unwrap_or_else(|_| Utc::now().date_naive())
}

fn parse_datetime(s: String) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&s, DATETIME_FMT).unwrap_or_else(|_| Utc::now().naive_utc())
}
