// Data module for transaction records and data sources
// Author: Gabriel Demetrios Lafis

mod csv;
mod json;

pub use self::csv::*;
pub use self::json::*;

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::analytics::SalesSummary;

/// Represents a generic source of transaction records
pub trait TransactionSource {
    /// Read all transactions from the source
    fn read(&self) -> Result<TransactionStore, DataError>;

    /// Get the source name
    fn name(&self) -> &str;

    /// Get the source type
    fn source_type(&self) -> SourceType;
}

/// Represents a generic sink for sales summaries
pub trait SummarySink {
    /// Write a sales summary to the sink
    fn write(&self, summary: &SalesSummary) -> Result<(), DataError>;

    /// Get the sink name
    fn name(&self) -> &str;

    /// Get the sink type
    fn sink_type(&self) -> SinkType;
}

/// Recognized transaction columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    TransactionId,
    StoreLocation,
    ProductCategory,
    TotalPrice,
    Quantity,
    CustomerSatisfaction,
    PaymentMethod,
}

impl TransactionField {
    /// Get the source column header for this field
    pub fn column_name(&self) -> &'static str {
        match self {
            TransactionField::TransactionId => "TransactionID",
            TransactionField::StoreLocation => "StoreLocation",
            TransactionField::ProductCategory => "ProductCategory",
            TransactionField::TotalPrice => "TotalPrice",
            TransactionField::Quantity => "Quantity",
            TransactionField::CustomerSatisfaction => "CustomerSatisfaction",
            TransactionField::PaymentMethod => "PaymentMethod",
        }
    }
}

/// Represents one transaction as loaded from the source table
///
/// A field absent from the source row is `None`; a field present with an
/// empty value is `Some("")`. Columns outside the recognized set are kept
/// in `extra` and ignored by the engines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: Option<String>,
    pub store_location: Option<String>,
    pub product_category: Option<String>,
    pub total_price: Option<String>,
    pub quantity: Option<String>,
    pub customer_satisfaction: Option<String>,
    pub payment_method: Option<String>,
    pub extra: HashMap<String, String>,
}

impl Transaction {
    /// Build a transaction from a row of column name to value mappings
    pub fn from_fields(mut fields: HashMap<String, String>) -> Self {
        let transaction_id = fields.remove(TransactionField::TransactionId.column_name());
        let store_location = fields.remove(TransactionField::StoreLocation.column_name());
        let product_category = fields.remove(TransactionField::ProductCategory.column_name());
        let total_price = fields.remove(TransactionField::TotalPrice.column_name());
        let quantity = fields.remove(TransactionField::Quantity.column_name());
        let customer_satisfaction =
            fields.remove(TransactionField::CustomerSatisfaction.column_name());
        let payment_method = fields.remove(TransactionField::PaymentMethod.column_name());

        Transaction {
            transaction_id,
            store_location,
            product_category,
            total_price,
            quantity,
            customer_satisfaction,
            payment_method,
            extra: fields,
        }
    }

    /// Get the value of a recognized field, if present on this record
    pub fn field(&self, field: TransactionField) -> Option<&str> {
        let value = match field {
            TransactionField::TransactionId => &self.transaction_id,
            TransactionField::StoreLocation => &self.store_location,
            TransactionField::ProductCategory => &self.product_category,
            TransactionField::TotalPrice => &self.total_price,
            TransactionField::Quantity => &self.quantity,
            TransactionField::CustomerSatisfaction => &self.customer_satisfaction,
            TransactionField::PaymentMethod => &self.payment_method,
        };

        value.as_deref()
    }
}

/// Ordered, immutable store of loaded transactions
///
/// Iteration order is source order. No validation is performed at load
/// time; malformed or missing fields surface as zero/ignored contributions
/// in the query and analytics engines.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Build a store from an ordered sequence of row field-mappings
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = HashMap<String, String>>,
    {
        TransactionStore {
            transactions: rows.into_iter().map(Transaction::from_fields).collect(),
        }
    }

    /// Get the number of transactions in the store
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get all transactions in source order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a reference to a transaction by position
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Get all transactions matching a predicate, in source order
    pub fn find<P>(&self, predicate: P) -> Vec<&Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.transactions.iter().filter(|t| predicate(t)).collect()
    }
}

/// Represents a source type
#[derive(Debug, Clone, PartialEq)]
pub enum SourceType {
    File,
    Custom(String),
}

/// Represents a sink type
#[derive(Debug, Clone, PartialEq)]
pub enum SinkType {
    File,
    Custom(String),
}

/// Represents an error in the data module
#[derive(Debug)]
pub enum DataError {
    IoError(std::io::Error),
    ParseError(String),
    SerializeError(String),
    Other(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::IoError(err) => write!(f, "IO error: {}", err),
            DataError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DataError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            DataError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::IoError(err)
    }
}
