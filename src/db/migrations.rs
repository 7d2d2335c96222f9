use anyhow::Context;
use rusqlite::Connection;

/// Applied in order; each entry runs once and is recorded in `_migrations`.
/// SQL is embedded so in-memory databases (tests) get the full schema.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_bookings",
        "CREATE TABLE IF NOT EXISTS bookings (
            id TEXT PRIMARY KEY,
            client_name TEXT NOT NULL,
            client_phone TEXT NOT NULL,
            client_email TEXT,
            service TEXT NOT NULL,
            stylist TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'confirmed',
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings(date);
        -- One confirmed booking per (date, stylist, time); cancelled rows
        -- fall out of the index so the slot frees up again.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_confirmed_slot
            ON bookings(date, stylist, time) WHERE status = 'confirmed';",
    ),
    (
        "0002_suppliers",
        "CREATE TABLE IF NOT EXISTS suppliers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            contact TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            category TEXT,
            created_at TEXT NOT NULL
        );",
    ),
    (
        "0003_expenses",
        "CREATE TABLE IF NOT EXISTS expenses (
            id TEXT PRIMARY KEY,
            concept TEXT NOT NULL,
            category TEXT,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            supplier_id TEXT,
            description TEXT,
            payment_method TEXT NOT NULL DEFAULT 'cash',
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
    ),
    (
        "0004_inventory",
        "CREATE TABLE IF NOT EXISTS inventory (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT,
            stock INTEGER NOT NULL,
            min_stock INTEGER NOT NULL,
            purchase_price REAL NOT NULL,
            sale_price REAL,
            supplier_id TEXT,
            created_at TEXT NOT NULL
        );",
    ),
    (
        "0005_employees",
        "CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            position TEXT NOT NULL,
            salary REAL NOT NULL,
            hired_on TEXT,
            schedule TEXT,
            commission_pct REAL,
            status TEXT NOT NULL DEFAULT 'active',
            created_at TEXT NOT NULL
        );",
    ),
];

pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .context("failed to create migrations table")?;

    for (name, sql) in MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .context("failed to check migration status")?;

        if already_applied {
            continue;
        }

        conn.execute_batch(sql)
            .with_context(|| format!("failed to apply migration: {name}"))?;

        conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])
            .with_context(|| format!("failed to record migration: {name}"))?;

        tracing::info!("applied migration: {name}");
    }

    Ok(())
}
