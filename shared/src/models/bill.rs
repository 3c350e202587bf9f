//! Completed bill model and discount types

use super::order::LineItem;
use serde::{Deserialize, Serialize};

/// Discount selection passed into settlement
///
/// Non-finite or non-positive values are treated as no discount at
/// settlement time; callers never see an error for bad input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Discount {
    #[default]
    None,
    /// Percentage of the subtotal, 0-100
    Percent(f64),
    /// Flat amount, capped at the subtotal
    Amount(f64),
}

/// Discount kind as frozen into a bill
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DiscountKind {
    #[serde(rename = "percent")]
    Percent,
    #[serde(rename = "amount")]
    Amount,
    #[default]
    None,
}

/// Discount as applied to a settled bill
///
/// `amount` is computed once at settlement and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountApplied {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
    pub amount: f64,
}

/// Bill produced by settling one table's accumulated orders
///
/// Invariant: `total = sub_total - discount.amount`, all rounded to two
/// decimal places at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedBill {
    pub table: String,
    pub items: Vec<LineItem>,
    pub sub_total: f64,
    pub discount: DiscountApplied,
    pub total: f64,
    pub time: String,
    pub payment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_wire_shape() {
        let bill = CompletedBill {
            table: "Restaurant - T1".to_string(),
            items: vec![LineItem::new("Dosa", 1, 4.5)],
            sub_total: 4.5,
            discount: DiscountApplied {
                kind: DiscountKind::Percent,
                value: 10.0,
                amount: 0.45,
            },
            total: 4.05,
            time: "2025-01-01 12:00:00".to_string(),
            payment: "Cash".to_string(),
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["subTotal"], 4.5);
        assert_eq!(json["discount"]["type"], "percent");
        assert_eq!(json["payment"], "Cash");
    }
}
