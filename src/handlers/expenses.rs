use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Expense, NewExpense};
use crate::state::AppState;

// GET /api/expenses
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = {
        let db = state.db.lock().unwrap();
        queries::list_expenses(&db)?
    };
    Ok(Json(expenses))
}

// POST /api/expenses
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    let expense = Expense {
        id: Uuid::new_v4().to_string(),
        concept: body.concept,
        category: body.category,
        amount: body.amount,
        date: body.date,
        supplier_id: body.supplier_id,
        description: body.description,
        payment_method: body.payment_method,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::insert_expense(&db, &expense)?;
    }
    Ok(Json(expense))
}

// PUT /api/expenses/:id
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NewExpense>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_expense(&db, &id, &body)?
    };

    if !matched {
        return Err(AppError::NotFound("expense".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/expenses/:id
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_expense(&db, &id)?
    };

    if !removed {
        return Err(AppError::NotFound("expense".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}
