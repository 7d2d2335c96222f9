use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{InventoryItem, NewInventoryItem};
use crate::state::AppState;

// GET /api/inventory
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InventoryItem>>, AppError> {
    let items = {
        let db = state.db.lock().unwrap();
        queries::list_inventory(&db)?
    };
    Ok(Json(items))
}

// POST /api/inventory
pub async fn create_inventory_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewInventoryItem>,
) -> Result<Json<InventoryItem>, AppError> {
    let item = InventoryItem {
        id: Uuid::new_v4().to_string(),
        name: body.name,
        category: body.category,
        stock: body.stock,
        min_stock: body.min_stock,
        purchase_price: body.purchase_price,
        sale_price: body.sale_price,
        supplier_id: body.supplier_id,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::insert_inventory_item(&db, &item)?;
    }
    Ok(Json(item))
}

// PUT /api/inventory/:id
pub async fn update_inventory_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NewInventoryItem>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_inventory_item(&db, &id, &body)?
    };

    if !matched {
        return Err(AppError::NotFound("inventory item".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/inventory/:id
pub async fn delete_inventory_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_inventory_item(&db, &id)?
    };

    if !removed {
        return Err(AppError::NotFound("inventory item".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}
