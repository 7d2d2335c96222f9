use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use salonbook::config::AppConfig;
use salonbook::db;
use salonbook::handlers;
use salonbook::models::SalonCatalog;
use salonbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        catalog: SalonCatalog::builtin(),
    });

    // The booking widget is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/", get(handlers::health::api_root))
        .route("/api/services", get(handlers::catalog::get_services))
        .route("/api/stylists", get(handlers::catalog::get_stylists))
        .route(
            "/api/available-slots/:date/:stylist",
            get(handlers::catalog::get_available_slots),
        )
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route(
            "/api/bookings/:id",
            delete(handlers::bookings::cancel_booking),
        )
        .route("/api/suppliers", get(handlers::suppliers::list_suppliers))
        .route("/api/suppliers", post(handlers::suppliers::create_supplier))
        .route(
            "/api/suppliers/:id",
            put(handlers::suppliers::update_supplier),
        )
        .route(
            "/api/suppliers/:id",
            delete(handlers::suppliers::delete_supplier),
        )
        .route("/api/expenses", get(handlers::expenses::list_expenses))
        .route("/api/expenses", post(handlers::expenses::create_expense))
        .route("/api/expenses/:id", put(handlers::expenses::update_expense))
        .route(
            "/api/expenses/:id",
            delete(handlers::expenses::delete_expense),
        )
        .route("/api/inventory", get(handlers::inventory::list_inventory))
        .route(
            "/api/inventory",
            post(handlers::inventory::create_inventory_item),
        )
        .route(
            "/api/inventory/:id",
            put(handlers::inventory::update_inventory_item),
        )
        .route(
            "/api/inventory/:id",
            delete(handlers::inventory::delete_inventory_item),
        )
        .route("/api/employees", get(handlers::employees::list_employees))
        .route("/api/employees", post(handlers::employees::create_employee))
        .route(
            "/api/employees/:id",
            put(handlers::employees::update_employee),
        )
        .route(
            "/api/employees/:id",
            delete(handlers::employees::delete_employee),
        )
        .route("/api/stats/summary", get(handlers::stats::get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
