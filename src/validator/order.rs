// file: src/validator/order.rs
// description: order business rules
// reference: input validation patterns

use crate::error::Violation;
use crate::models::{Order, Record};
use crate::pipeline::Validator;
use crate::utils::validation::Rules;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValidator;

impl OrderValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<Order> for OrderValidator {
    fn check(&self, order: &Order) -> bool {
        self.violations(order).is_empty()
    }

    fn violations(&self, order: &Order) -> Vec<Violation> {
        Rules::collect([
            Rules::require_non_blank("id", order.id()),
            Rules::require_non_blank("customer", order.customer_id()),
            Rules::require_positive_f64("total", order.total()),
            Rules::require_positive_i64("items", order.item_count()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_order_passes() {
        let validator = OrderValidator::new();
        assert!(validator.check(&Order::new("ORD-001", "cust-42", 99.50, 3)));
        assert!(validator.check(&Order::new("o", "c", 0.01, 1)));
    }

    #[test]
    fn test_invalid_orders_fail() {
        let validator = OrderValidator::new();

        assert!(!validator.check(&Order::new("  ", "cust-42", 99.50, 3)));
        assert!(!validator.check(&Order::new("ORD-1", "", 99.50, 3)));
        assert!(!validator.check(&Order::new("ORD-1", "cust-42", 0.0, 3)));
        assert!(!validator.check(&Order::new("ORD-1", "cust-42", -5.0, 3)));
        assert!(!validator.check(&Order::new("ORD-1", "cust-42", 10.0, 0)));
        assert!(!validator.check(&Order::new("ORD-1", "cust-42", f64::NAN, 1)));
    }

    #[test]
    fn test_reports_every_violation() {
        let violations = OrderValidator::new().violations(&Order::new("", " ", 0.0, -1));
        let fields: Vec<&str> = violations.iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["id", "customer", "total", "items"]);
    }
}
