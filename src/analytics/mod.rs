// Analytics module for grouped revenue and sales summaries
// Author: Gabriel Demetrios Lafis

pub mod numeric;

mod summary;

pub use summary::*;

use std::collections::HashMap;

use crate::data::{Transaction, TransactionField, TransactionStore};

use self::numeric::{parse_money, parse_quantity, parse_satisfaction, round2};

/// Analytics engine for grouped revenue totals and sales summaries
///
/// Pure reads over an immutable store; every call computes a fresh result,
/// so callers cache if they need to.
pub struct AnalyticsEngine<'a> {
    store: &'a TransactionStore,
}

impl<'a> AnalyticsEngine<'a> {
    /// Create a new analytics engine over a store
    pub fn new(store: &'a TransactionStore) -> Self {
        AnalyticsEngine { store }
    }

    /// Sum revenue per distinct value of a grouping field
    ///
    /// A transaction contributes only when it carries both the grouping
    /// field and `TotalPrice`; an unparsable price contributes 0.0 but
    /// still names its group. Totals are rounded to 2 decimal places,
    /// half away from zero.
    pub fn group_revenue_by(&self, field: TransactionField) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();

        for transaction in self.store.all() {
            let key = match transaction.field(field) {
                Some(key) => key,
                None => continue,
            };
            let price = match transaction.field(TransactionField::TotalPrice) {
                Some(price) => price,
                None => continue,
            };

            *totals.entry(key.to_string()).or_insert(0.0) += parse_money(price);
        }

        for total in totals.values_mut() {
            *total = round2(*total);
        }

        totals
    }

    /// Sum revenue per store location
    pub fn revenue_by_location(&self) -> HashMap<String, f64> {
        self.group_revenue_by(TransactionField::StoreLocation)
    }

    /// Compute the sales summary for one value of a grouping field
    ///
    /// Returns `None` when no transaction matches the key. The
    /// satisfaction average divides by the group's full transaction
    /// count, not by the count of records carrying a satisfaction value.
    pub fn sales_summary(&self, field: TransactionField, key: &str) -> Option<SalesSummary> {
        let group: Vec<&Transaction> = self
            .store
            .all()
            .iter()
            .filter(|t| t.field(field) == Some(key))
            .collect();

        if group.is_empty() {
            return None;
        }

        let transaction_count = group.len();

        let total_revenue: f64 = group
            .iter()
            .filter_map(|t| t.field(TransactionField::TotalPrice))
            .map(parse_money)
            .sum();

        let average_transaction_value = if transaction_count > 0 {
            total_revenue / transaction_count as f64
        } else {
            0.0
        };

        let total_quantity: i64 = group
            .iter()
            .filter_map(|t| t.field(TransactionField::Quantity))
            .map(parse_quantity)
            .sum();

        let satisfaction_sum: f64 = group
            .iter()
            .filter_map(|t| t.field(TransactionField::CustomerSatisfaction))
            .filter_map(parse_satisfaction)
            .sum();

        let average_satisfaction = satisfaction_sum / transaction_count as f64;

        // Count payment methods in first-seen order
        let mut method_counts: Vec<(String, usize)> = Vec::new();

        for transaction in &group {
            if let Some(method) = transaction.field(TransactionField::PaymentMethod) {
                match method_counts.iter_mut().find(|(name, _)| name == method) {
                    Some((_, count)) => *count += 1,
                    None => method_counts.push((method.to_string(), 1)),
                }
            }
        }

        let payment_methods: Vec<PaymentShare> = method_counts
            .into_iter()
            .map(|(method, count)| PaymentShare {
                method,
                count,
                percentage: count as f64 / transaction_count as f64 * 100.0,
            })
            .collect();

        Some(SalesSummary {
            group: key.to_string(),
            transaction_count,
            total_revenue,
            average_transaction_value,
            total_quantity,
            average_satisfaction,
            payment_methods,
        })
    }

    /// Compute the sales summary for one store location
    pub fn location_summary(&self, location: &str) -> Option<SalesSummary> {
        self.sales_summary(TransactionField::StoreLocation, location)
    }
}
