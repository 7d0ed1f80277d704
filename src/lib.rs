// Transaction Analytics Engine
// Author: Gabriel Demetrios Lafis

//! # Transaction Analytics Engine
//!
//! A transaction analytics engine written in Rust.
//!
//! ## Features
//!
//! - Loading tabular transaction records from delimited text files
//! - Counts, distinct-value enumeration, lookup by ID and field filtering
//! - Revenue totals grouped by any dimension
//! - Composite per-group sales summaries (revenue, quantity, satisfaction,
//!   payment-method breakdown)
//! - JSON export of sales summaries
//!
//! Presentation is left to the caller: every operation returns plain data
//! for a CLI, GUI or export layer to render.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use transaction_analytics_engine::{
//!     analytics::AnalyticsEngine,
//!     data::{TransactionField, TransactionStore},
//!     query::QueryEngine,
//! };
//!
//! // Rows as handed over by a tabular-data reader
//! let rows = vec![
//!     HashMap::from([
//!         ("TransactionID".to_string(), "1".to_string()),
//!         ("StoreLocation".to_string(), "Store A".to_string()),
//!         ("TotalPrice".to_string(), "10.00".to_string()),
//!     ]),
//!     HashMap::from([
//!         ("TransactionID".to_string(), "2".to_string()),
//!         ("StoreLocation".to_string(), "Store A".to_string()),
//!         ("TotalPrice".to_string(), "15.00".to_string()),
//!     ]),
//! ];
//!
//! let store = TransactionStore::from_rows(rows);
//!
//! // Query the store
//! let queries = QueryEngine::new(&store);
//! assert_eq!(queries.total_transactions(), 2);
//! assert!(queries.find_by_id("2").is_some());
//!
//! // Aggregate revenue by store location
//! let analytics = AnalyticsEngine::new(&store);
//! let revenue = analytics.group_revenue_by(TransactionField::StoreLocation);
//! assert_eq!(revenue["Store A"], 25.00);
//! ```

pub mod analytics;
pub mod data;
pub mod query;
pub mod utils;

// Re-export main types
pub use analytics::{AnalyticsEngine, PaymentShare, SalesSummary};
pub use data::{
    CsvSource, JsonSummarySink, SummarySink, Transaction, TransactionField, TransactionSource,
    TransactionStore,
};
pub use query::QueryEngine;
pub use utils::Config;
