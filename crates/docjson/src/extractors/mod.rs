//! Built-in document extractors.
//!
//! One extractor per format category, each implementing the
//! [`DocumentExtractor`](crate::plugins::DocumentExtractor) plugin trait.

use crate::plugins::registry::{ExtractorRegistry, get_extractor_registry};
use crate::{DocjsonError, Result};
use std::sync::Arc;

pub mod csv;
pub mod docx;
pub mod excel;
pub mod image;
pub mod pdf;
pub mod structured;
pub mod text;

pub use csv::CsvExtractor;
pub use docx::WordExtractor;
pub use excel::SpreadsheetExtractor;
pub use image::ImageExtractor;
pub use pdf::PdfExtractor;
pub use structured::JsonExtractor;
pub use text::PlainTextExtractor;

/// Register the built-in extractors into `registry`.
pub fn register_defaults(registry: &mut ExtractorRegistry) -> Result<()> {
    registry.register(Arc::new(PdfExtractor::new()))?;
    registry.register(Arc::new(WordExtractor::new()))?;
    registry.register(Arc::new(SpreadsheetExtractor::new()))?;
    registry.register(Arc::new(CsvExtractor::new()))?;
    registry.register(Arc::new(ImageExtractor::new()))?;
    registry.register(Arc::new(JsonExtractor::new()))?;
    registry.register(Arc::new(PlainTextExtractor::new()))?;
    Ok(())
}

/// A registry holding only the built-in extractors.
pub fn default_registry() -> Result<ExtractorRegistry> {
    let mut registry = ExtractorRegistry::new();
    register_defaults(&mut registry)?;
    Ok(registry)
}

/// Make sure the global registry has extractors, registering the built-ins
/// if it is empty.
pub fn ensure_initialized() -> Result<()> {
    let registry = get_extractor_registry();
    let mut registry = registry
        .write()
        .map_err(|e| DocjsonError::Other(format!("Extractor registry lock poisoned: {}", e)))?;

    if registry.is_empty() {
        register_defaults(&mut registry)?;
    }

    Ok(())
}
