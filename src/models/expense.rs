use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub concept: String,
    pub category: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub supplier_id: Option<String>,
    pub description: Option<String>,
    pub payment_method: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub concept: String,
    pub category: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub supplier_id: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "cash".to_string()
}
