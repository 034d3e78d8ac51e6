//! Spreadsheet extractor.

use crate::Result;
use crate::core::batch_mode::run_blocking;
use crate::core::config::ConversionConfig;
use crate::extraction::excel::{SpreadsheetOptions, extract_spreadsheet};
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Reads every worksheet and shapes the rows according to the sheet options
/// of the item's configuration.
pub struct SpreadsheetExtractor;

impl Default for SpreadsheetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadsheetExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for SpreadsheetExtractor {
    fn name(&self) -> &str {
        "spreadsheet-extractor"
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

    fn description(&self) -> &str {
        "Converts XLSX, XLS, XLSB and ODS worksheets into header-keyed rows"
    }
}

#[async_trait]
impl DocumentExtractor for SpreadsheetExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Spreadsheet
    }

    #[tracing::instrument(
        skip(self, content, config),
        fields(extractor.name = self.name(), content.size_bytes = content.len())
    )]
    async fn extract_bytes(&self, content: &[u8], config: &ConversionConfig) -> Result<ExtractionResult> {
        let options = SpreadsheetOptions::from(config);
        let result = run_blocking(content, move |bytes| extract_spreadsheet(bytes, &options)).await?;
        tracing::debug!(records = result.len(), "Spreadsheet extracted");
        Ok(result)
    }
}
