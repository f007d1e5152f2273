use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub order_id: i32,
    pub product_id: i32,
    pub unit_price: BigDecimal,
    pub quantity: i16,
    /// Fraction of the unit price taken off, in `[0, 1)`.
    pub discount: BigDecimal,
}

impl OrderLineItem {
    /// `unit_price * quantity * (1 - discount)`, kept at full precision.
    pub fn line_total(&self) -> BigDecimal {
        let gross = &self.unit_price * BigDecimal::from(self.quantity);
        gross * (BigDecimal::from(1) - &self.discount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: String,
    pub order_date: DateTime<Utc>,
    pub lines: Vec<OrderLineItem>,
}

impl Order {
    /// Sum of every line total. An order without lines totals zero.
    pub fn total_amount(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.line_total())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: i32,
    pub customer_id: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        let total_amount = order.total_amount();
        OrderSummary {
            order_id: order.order_id,
            customer_id: order.customer_id,
            order_date: order.order_date,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn line(product_id: i32, price: &str, quantity: i16, discount: &str) -> OrderLineItem {
        OrderLineItem {
            order_id: 10248,
            product_id,
            unit_price: dec(price),
            quantity,
            discount: dec(discount),
        }
    }

    fn order(lines: Vec<OrderLineItem>) -> Order {
        Order {
            order_id: 10248,
            customer_id: "VINET".to_string(),
            order_date: Utc.with_ymd_and_hms(1996, 7, 4, 0, 0, 0).unwrap(),
            lines,
        }
    }

    #[test]
    fn total_applies_discount_per_line() {
        let o = order(vec![line(1, "10", 3, "0.0"), line(2, "5", 2, "0.1")]);
        assert_eq!(o.total_amount(), dec("39"));
    }

    #[test]
    fn order_without_lines_totals_zero() {
        assert_eq!(order(vec![]).total_amount(), BigDecimal::zero());
    }

    #[test]
    fn line_total_keeps_full_precision() {
        // 14.0000 * 12 * 0.85 = 142.8; 9.8 * 10 * (1 - 0.0125) = 96.775
        let o = order(vec![line(11, "14.0000", 12, "0.15"), line(42, "9.8", 10, "0.0125")]);
        assert_eq!(o.lines[1].line_total(), dec("96.775"));
        assert_eq!(o.total_amount(), dec("239.575"));
    }

    #[test]
    fn summary_carries_order_identity_and_total() {
        let o = order(vec![line(1, "18", 2, "0")]);
        let date = o.order_date;
        let summary = OrderSummary::from(o);
        assert_eq!(summary.order_id, 10248);
        assert_eq!(summary.customer_id, "VINET");
        assert_eq!(summary.order_date, date);
        assert_eq!(summary.total_amount, dec("36"));
    }
}
