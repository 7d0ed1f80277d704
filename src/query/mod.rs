// Query module for read-only lookups over the transaction store
// Author: Gabriel Demetrios Lafis

use std::collections::HashSet;

use log::info;

use crate::data::{Transaction, TransactionField, TransactionStore};

/// Query engine for counts, distinct values and lookups
///
/// All operations are pure reads over an immutable store; calling any of
/// them twice on the same store yields identical results.
pub struct QueryEngine<'a> {
    store: &'a TransactionStore,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine over a store
    pub fn new(store: &'a TransactionStore) -> Self {
        QueryEngine { store }
    }

    /// Get the total number of transactions
    pub fn total_transactions(&self) -> usize {
        self.store.len()
    }

    /// Get every observed value of a field across all transactions
    ///
    /// Records missing the field contribute nothing.
    pub fn distinct(&self, field: TransactionField) -> HashSet<String> {
        self.store
            .all()
            .iter()
            .filter_map(|t| t.field(field))
            .map(|value| value.to_string())
            .collect()
    }

    /// Get the distinct store locations and product categories
    pub fn unique_locations_and_categories(&self) -> (HashSet<String>, HashSet<String>) {
        (
            self.distinct(TransactionField::StoreLocation),
            self.distinct(TransactionField::ProductCategory),
        )
    }

    /// Get the first transaction whose ID matches exactly
    pub fn find_by_id(&self, id: &str) -> Option<&'a Transaction> {
        self.store
            .all()
            .iter()
            .find(|t| t.field(TransactionField::TransactionId) == Some(id))
    }

    /// Get all transactions whose field equals a value, in source order
    pub fn by_field(&self, field: TransactionField, value: &str) -> Vec<&'a Transaction> {
        self.store
            .all()
            .iter()
            .filter(|t| t.field(field) == Some(value))
            .collect()
    }

    /// Get all transactions for a store location
    pub fn by_location(&self, location: &str) -> Vec<&'a Transaction> {
        self.by_field(TransactionField::StoreLocation, location)
    }

    /// Get all transactions for a product category
    pub fn by_category(&self, category: &str) -> Vec<&'a Transaction> {
        let result = self.by_field(TransactionField::ProductCategory, category);

        if result.is_empty() {
            info!("No transactions found for category: {}", category);
        }

        result
    }
}
