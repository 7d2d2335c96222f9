use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub stock: i64,
    pub min_stock: i64,
    pub purchase_price: f64,
    pub sale_price: Option<f64>,
    pub supplier_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: Option<String>,
    pub stock: i64,
    pub min_stock: i64,
    pub purchase_price: f64,
    pub sale_price: Option<f64>,
    pub supplier_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(stock: i64, min_stock: i64) -> InventoryItem {
        InventoryItem {
            id: "it-1".to_string(),
            name: "Champú".to_string(),
            category: None,
            stock,
            min_stock,
            purchase_price: 3.0,
            sale_price: None,
            supplier_id: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(item(4, 5).is_low_stock());
        assert!(item(5, 5).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }
}
