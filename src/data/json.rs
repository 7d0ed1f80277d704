// JSON summary sink implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use super::{DataError, SinkType, SummarySink};
use crate::analytics::SalesSummary;

/// JSON summary sink
///
/// Serializes one [`SalesSummary`] to a pretty-printed JSON file for
/// export by a calling CLI or GUI.
pub struct JsonSummarySink {
    path: String,
}

impl JsonSummarySink {
    /// Create a new JSON summary sink
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonSummarySink {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }
}

impl SummarySink for JsonSummarySink {
    fn write(&self, summary: &SalesSummary) -> Result<(), DataError> {
        let file = File::create(&self.path).map_err(DataError::IoError)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, summary)
            .map_err(|e| DataError::SerializeError(e.to_string()))?;

        writer.flush().map_err(DataError::IoError)?;

        info!("Exported sales summary for '{}' to {}", summary.group, self.path);

        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }

    fn sink_type(&self) -> SinkType {
        SinkType::File
    }
}
