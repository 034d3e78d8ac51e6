//! CSV extractor.

use crate::Result;
use crate::core::config::ConversionConfig;
use crate::extraction::csv::extract_csv;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Produces `{data: [row, ...]}` from comma-separated text.
pub struct CsvExtractor;

impl Default for CsvExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for CsvExtractor {
    fn name(&self) -> &str {
        "csv-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl DocumentExtractor for CsvExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Csv
    }

    async fn extract_bytes(&self, content: &[u8], config: &ConversionConfig) -> Result<ExtractionResult> {
        Ok(ExtractionResult::Single(extract_csv(content, config.include_row_numbers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_row_numbers_follow_config() {
        let config = ConversionConfig {
            include_row_numbers: true,
            ..Default::default()
        };
        let result = CsvExtractor::new().extract_bytes(b"a\nx\n", &config).await.unwrap();
        let ExtractionResult::Single(record) = result else {
            panic!("expected a single record");
        };
        assert_eq!(record["data"], json!([{"row_number": 2, "a": "x"}]));
    }
}
