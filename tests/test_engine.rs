// Store and query engine tests
// Author: Gabriel Demetrios Lafis

use std::io::Write;

use tempfile::NamedTempFile;

use transaction_analytics_engine::{
    data::{CsvSource, TransactionField, TransactionSource, TransactionStore},
    query::QueryEngine,
    utils::Config,
};

// Five data rows across three store locations
const FIXTURE: &str = "\
TransactionID,StoreLocation,ProductCategory,TotalPrice,Quantity,CustomerSatisfaction,PaymentMethod
1,Store A,Category 1,10.00,1,5,Card
2,Store B,Category 2,20.00,2,4,Cash
3,Store A,Category 1,15.00,1,3,Card
4,Store C,Category 3,25.00,1,4,Card
5,Store B,Category 2,30.00,3,5,Cash
";

fn fixture_store() -> TransactionStore {
    // Write the fixture to disk and load it through the CSV source
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    CsvSource::new(file.path(), true, ',').read().unwrap()
}

#[test]
fn test_total_transactions() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    assert_eq!(queries.total_transactions(), 5);
}

#[test]
fn test_store_preserves_row_order() {
    let store = fixture_store();

    assert_eq!(store.len(), 5);
    assert_eq!(store.get(0).unwrap().transaction_id.as_deref(), Some("1"));
    assert_eq!(store.get(4).unwrap().transaction_id.as_deref(), Some("5"));
    assert!(store.get(5).is_none());
}

#[test]
fn test_store_find_predicate() {
    let store = fixture_store();

    let single_item = store.find(|t| t.field(TransactionField::Quantity) == Some("1"));

    assert_eq!(single_item.len(), 3);
    assert_eq!(single_item[0].transaction_id.as_deref(), Some("1"));
}

#[test]
fn test_unique_locations_and_categories() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    let (locations, categories) = queries.unique_locations_and_categories();

    assert_eq!(locations.len(), 3);
    assert!(locations.contains("Store A"));
    assert!(locations.contains("Store B"));
    assert!(locations.contains("Store C"));

    assert_eq!(categories.len(), 3);
    assert!(categories.contains("Category 1"));
    assert!(categories.contains("Category 2"));
    assert!(categories.contains("Category 3"));
}

#[test]
fn test_find_by_id() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    let transaction = queries.find_by_id("1").unwrap();

    assert_eq!(transaction.store_location.as_deref(), Some("Store A"));
    assert_eq!(transaction.payment_method.as_deref(), Some("Card"));
}

#[test]
fn test_find_by_id_absent() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    assert!(queries.find_by_id("999").is_none());
}

#[test]
fn test_by_field_preserves_order() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    let transactions = queries.by_field(TransactionField::StoreLocation, "Store A");

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].transaction_id.as_deref(), Some("1"));
    assert_eq!(transactions[1].transaction_id.as_deref(), Some("3"));
}

#[test]
fn test_by_category() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    assert_eq!(queries.by_category("Category 2").len(), 2);
    assert!(queries.by_category("Category 9").is_empty());
}

#[test]
fn test_queries_are_idempotent() {
    let store = fixture_store();
    let queries = QueryEngine::new(&store);

    assert_eq!(queries.total_transactions(), queries.total_transactions());
    assert_eq!(
        queries.distinct(TransactionField::StoreLocation),
        queries.distinct(TransactionField::StoreLocation)
    );
    assert_eq!(
        queries.by_location("Store B"),
        queries.by_location("Store B")
    );
}

#[test]
fn test_missing_source_file_is_error() {
    let source = CsvSource::new("/no/such/file.csv", true, ',');

    assert!(source.read().is_err());
}

#[test]
fn test_short_row_leaves_fields_absent() {
    // The data row stops before the TotalPrice column
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"TransactionID,StoreLocation,TotalPrice\n1,Store A\n")
        .unwrap();

    let store = CsvSource::new(file.path(), true, ',').read().unwrap();

    assert_eq!(store.len(), 1);

    let transaction = store.get(0).unwrap();

    assert_eq!(transaction.store_location.as_deref(), Some("Store A"));
    assert!(transaction.total_price.is_none());
}

#[test]
fn test_unrecognized_columns_are_kept_as_extra() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"TransactionID,StoreLocation,Cashier\n1,Store A,Dana\n")
        .unwrap();

    let store = CsvSource::new(file.path(), true, ',').read().unwrap();
    let transaction = store.get(0).unwrap();

    assert_eq!(transaction.extra.get("Cashier").map(String::as_str), Some("Dana"));
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.source.delimiter, ',');
    assert!(config.source.has_header);
    assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_config_from_json_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();

    file.write_all(
        br#"{
            "source": {"path": "data.csv", "delimiter": ";", "has_header": false},
            "logging": {"level": "debug"}
        }"#,
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.source.path, "data.csv");
    assert_eq!(config.source.delimiter, ';');
    assert!(!config.source.has_header);
    assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();

    file.write_all(b"source:\n  path: data.csv\n  delimiter: \",\"\n  has_header: true\nlogging:\n  level: warn\n")
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.source.path, "data.csv");
    assert_eq!(config.log_level_filter(), log::LevelFilter::Warn);
}

#[test]
fn test_config_unsupported_extension_is_error() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"level=info").unwrap();

    assert!(Config::from_file(file.path()).is_err());
}
