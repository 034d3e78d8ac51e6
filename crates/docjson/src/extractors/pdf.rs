//! PDF extractor.

use crate::Result;
use crate::core::batch_mode::run_blocking;
use crate::core::config::ConversionConfig;
use crate::extraction::pdf::extract_pdf;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Produces `{text, pages, info}` for PDF documents.
pub struct PdfExtractor;

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extractor"
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
        "Extracts text, page count and document info from PDF files"
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Pdf
    }

    #[tracing::instrument(
        skip(self, content, _config),
        fields(extractor.name = self.name(), content.size_bytes = content.len())
    )]
    async fn extract_bytes(&self, content: &[u8], _config: &ConversionConfig) -> Result<ExtractionResult> {
        let record = run_blocking(content, extract_pdf).await?;
        Ok(ExtractionResult::Single(record))
    }
}
