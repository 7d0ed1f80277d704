// Sales summary types and formatting
// Author: Gabriel Demetrios Lafis

use std::fmt;

use serde::Serialize;

/// One payment method's share of a group's transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentShare {
    pub method: String,
    pub count: usize,
    pub percentage: f64,
}

/// Composite sales statistics for one group key
///
/// Structured values keep full numeric precision for programmatic and
/// export use; the [`fmt::Display`] rendering formats monetary and
/// percentage values to exactly 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub group: String,
    pub transaction_count: usize,
    pub total_revenue: f64,
    pub average_transaction_value: f64,
    pub total_quantity: i64,
    pub average_satisfaction: f64,
    pub payment_methods: Vec<PaymentShare>,
}

impl SalesSummary {
    /// Render the payment-method percentages as a single readable line
    pub fn payment_breakdown(&self) -> String {
        self.payment_methods
            .iter()
            .map(|share| format!("{}: {:.2}%", share.method, share.percentage))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for SalesSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total Transactions: {}", self.transaction_count)?;
        writeln!(f, "Total Revenue: {:.2}", self.total_revenue)?;
        writeln!(
            f,
            "Average Transaction Value: {:.2}",
            self.average_transaction_value
        )?;
        writeln!(f, "Total Quantity Sold: {}", self.total_quantity)?;
        writeln!(
            f,
            "Average Customer Satisfaction: {:.2}",
            self.average_satisfaction
        )?;
        write!(f, "Payment Method Percentage: {}", self.payment_breakdown())
    }
}
