use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position: String,
    pub salary: f64,
    pub hired_on: Option<NaiveDate>,
    pub schedule: Option<String>,
    pub commission_pct: Option<f64>,
    pub status: EmployeeStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position: String,
    pub salary: f64,
    pub hired_on: Option<NaiveDate>,
    pub schedule: Option<String>,
    pub commission_pct: Option<f64>,
}

/// Employees are soft-deleted: firing someone flips the status to inactive
/// so payroll history stays queryable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "inactive" => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Active,
        }
    }
}
