use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{NewSupplier, Supplier};
use crate::state::AppState;

// GET /api/suppliers
pub async fn list_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Supplier>>, AppError> {
    let suppliers = {
        let db = state.db.lock().unwrap();
        queries::list_suppliers(&db)?
    };
    Ok(Json(suppliers))
}

// POST /api/suppliers
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSupplier>,
) -> Result<Json<Supplier>, AppError> {
    let supplier = Supplier {
        id: Uuid::new_v4().to_string(),
        name: body.name,
        contact: body.contact,
        phone: body.phone,
        email: body.email,
        address: body.address,
        category: body.category,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::insert_supplier(&db, &supplier)?;
    }
    Ok(Json(supplier))
}

// PUT /api/suppliers/:id
pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NewSupplier>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_supplier(&db, &id, &body)?
    };

    if !matched {
        return Err(AppError::NotFound("supplier".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/suppliers/:id
pub async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_supplier(&db, &id)?
    };

    if !removed {
        return Err(AppError::NotFound("supplier".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}
