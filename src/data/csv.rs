// CSV transaction source implementation
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use super::{DataError, SourceType, TransactionSource, TransactionStore};
use crate::utils::SourceConfig;

/// CSV transaction source
///
/// Reads a delimited text file into a [`TransactionStore`]. Header names
/// become the row field names; a short row leaves its trailing fields
/// absent rather than failing the load.
pub struct CsvSource {
    path: String,
    has_header: bool,
    delimiter: char,
}

impl CsvSource {
    /// Create a new CSV transaction source
    pub fn new<P: AsRef<Path>>(path: P, has_header: bool, delimiter: char) -> Self {
        CsvSource {
            path: path.as_ref().to_string_lossy().to_string(),
            has_header,
            delimiter,
        }
    }

    /// Create a CSV transaction source from a source configuration
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.path, config.has_header, config.delimiter)
    }
}

impl TransactionSource for CsvSource {
    fn read(&self) -> Result<TransactionStore, DataError> {
        let file = File::open(&self.path).map_err(DataError::IoError)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter as u8)
            .has_headers(self.has_header)
            .flexible(true)
            .from_reader(reader);

        // Read headers to name the row fields
        let headers: Vec<String> = if self.has_header {
            csv_reader
                .headers()
                .map_err(|e| DataError::ParseError(e.to_string()))?
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            // Generate column names if no header
            let record = csv_reader
                .records()
                .next()
                .ok_or_else(|| DataError::ParseError("Empty CSV file".to_string()))?
                .map_err(|e| DataError::ParseError(e.to_string()))?;

            (0..record.len()).map(|i| format!("column_{}", i)).collect()
        };

        // Reset reader if we've already consumed the first record
        if !self.has_header {
            let file = File::open(&self.path).map_err(DataError::IoError)?;
            let reader = BufReader::new(file);
            csv_reader = csv::ReaderBuilder::new()
                .delimiter(self.delimiter as u8)
                .has_headers(self.has_header)
                .flexible(true)
                .from_reader(reader);
        }

        // Read data rows in source order
        let mut rows: Vec<HashMap<String, String>> = Vec::new();

        for result in csv_reader.records() {
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            let fields: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.clone(), value.to_string()))
                .collect();

            rows.push(fields);
        }

        let store = TransactionStore::from_rows(rows);
        info!("Loaded {} transactions from {}", store.len(), self.path);

        Ok(store)
    }

    fn name(&self) -> &str {
        &self.path
    }

    fn source_type(&self) -> SourceType {
        SourceType::File
    }
}
