// file: src/models/order.rs
// description: order record with customer, total and item count
// reference: internal data structures

use super::record::{Record, RecordKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    total: f64,
    item_count: i64,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        total: f64,
        item_count: i64,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            total,
            item_count,
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn item_count(&self) -> i64 {
        self.item_count
    }
}

impl Record for Order {
    const KIND: RecordKind = RecordKind::Order;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> Option<&str> {
        Some(&self.customer_id)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("customer", self.customer_id.clone()),
            ("total", format!("{:.2}", self.total)),
            ("items", self.item_count.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_fields() {
        let order = Order::new("ORD-001", "cust-42", 99.5, 3);

        assert_eq!(order.id(), "ORD-001");
        assert_eq!(order.owner(), Some("cust-42"));
        assert_eq!(
            order.fields(),
            vec![
                ("customer", "cust-42".to_string()),
                ("total", "99.50".to_string()),
                ("items", "3".to_string()),
            ]
        );
        assert_eq!(order.storage_key(), "order_ORD-001");
    }

    #[test]
    fn test_order_deserializes_from_json() {
        let order: Order = serde_json::from_str(
            r#"{"id":"ORD-9","customer_id":"c","total":12.0,"item_count":1}"#,
        )
        .unwrap();
        assert_eq!(order, Order::new("ORD-9", "c", 12.0, 1));
    }
}
