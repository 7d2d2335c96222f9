use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Employee, EmployeeStatus, NewEmployee};
use crate::state::AppState;

// GET /api/employees
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = {
        let db = state.db.lock().unwrap();
        queries::list_employees(&db)?
    };
    Ok(Json(employees))
}

// POST /api/employees
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewEmployee>,
) -> Result<Json<Employee>, AppError> {
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: body.name,
        phone: body.phone,
        email: body.email,
        position: body.position,
        salary: body.salary,
        hired_on: body.hired_on,
        schedule: body.schedule,
        commission_pct: body.commission_pct,
        status: EmployeeStatus::Active,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::insert_employee(&db, &employee)?;
    }
    Ok(Json(employee))
}

// PUT /api/employees/:id
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NewEmployee>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::update_employee(&db, &id, &body)?
    };

    if !matched {
        return Err(AppError::NotFound("employee".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/employees/:id
//
// Soft delete: the employee flips to inactive and stays listed.
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let matched = {
        let db = state.db.lock().unwrap();
        queries::deactivate_employee(&db, &id)?
    };

    if !matched {
        return Err(AppError::NotFound("employee".to_string()));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}
