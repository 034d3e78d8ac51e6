//! Image extractor backed by OCR.

use crate::Result;
use crate::core::batch_mode::run_blocking;
use crate::core::config::ConversionConfig;
use crate::extraction::image::extract_image;
use crate::ocr::{OcrEngine, engine_for};
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;
use std::sync::Arc;

/// Recognizes text in images, producing `{text, extracted_by: "OCR"}`.
///
/// A fresh OCR session is acquired for every image and released before the
/// extraction returns, whether recognition succeeded or not.
pub struct ImageExtractor {
    engine: Option<Arc<dyn OcrEngine>>,
}

impl ImageExtractor {
    /// Use the engine selected by each item's `ocr` configuration.
    pub fn new() -> Self {
        Self { engine: None }
    }

    /// Always use `engine`, ignoring the configured engine kind.
    pub fn with_engine(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine: Some(engine) }
    }
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ImageExtractor {
    fn name(&self) -> &str {
        "image-extractor"
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
        "Extracts text from images (PNG, JPEG, TIFF, BMP, GIF, WebP) with Tesseract OCR"
    }
}

#[async_trait]
impl DocumentExtractor for ImageExtractor {
    fn category(&self) -> FormatCategory {
        FormatCategory::Image
    }

    #[tracing::instrument(
        skip(self, content, config),
        fields(
            extractor.name = self.name(),
            content.size_bytes = content.len(),
            ocr.language = %config.ocr.language,
        )
    )]
    async fn extract_bytes(&self, content: &[u8], config: &ConversionConfig) -> Result<ExtractionResult> {
        let engine = match &self.engine {
            Some(engine) => Arc::clone(engine),
            None => engine_for(&config.ocr)?,
        };
        let language = config.ocr.language.clone();

        let record = run_blocking(content, move |image| extract_image(engine.as_ref(), image, &language)).await?;
        Ok(ExtractionResult::Single(record))
    }
}
