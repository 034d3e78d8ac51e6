//! Extractor plugin trait.

use crate::Result;
use crate::core::config::ConversionConfig;
use crate::plugins::Plugin;
use crate::types::{ExtractionResult, FormatCategory};
use async_trait::async_trait;

/// Turns the decoded bytes of one file category into an [`ExtractionResult`].
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use docjson::plugins::{DocumentExtractor, Plugin};
/// use docjson::types::{ExtractionResult, FormatCategory, record};
/// use docjson::{ConversionConfig, Result};
///
/// struct ShoutingTextExtractor;
///
/// impl Plugin for ShoutingTextExtractor {
///     fn name(&self) -> &str { "shouting-text" }
///     fn version(&self) -> String { "1.0.0".to_string() }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn shutdown(&self) -> Result<()> { Ok(()) }
/// }
///
/// #[async_trait]
/// impl DocumentExtractor for ShoutingTextExtractor {
///     fn category(&self) -> FormatCategory { FormatCategory::Text }
///
///     fn priority(&self) -> i32 { 60 }
///
///     async fn extract_bytes(&self, content: &[u8], _config: &ConversionConfig) -> Result<ExtractionResult> {
///         let text = String::from_utf8_lossy(content).to_uppercase();
///         Ok(ExtractionResult::Single(record([("text", text.into())])))
///     }
/// }
/// ```
#[async_trait]
pub trait DocumentExtractor: Plugin {
    /// The category this extractor handles.
    fn category(&self) -> FormatCategory;

    /// Extract from in-memory bytes.
    ///
    /// `config` is the configuration already resolved for the current item.
    ///
    /// # Errors
    ///
    /// - `DocjsonError::ExtractionFailed` - the engine rejected the content
    /// - `DocjsonError::Decode` - the content is not valid UTF-8/JSON where required
    async fn extract_bytes(&self, content: &[u8], config: &ConversionConfig) -> Result<ExtractionResult>;

    /// Higher priority wins when several extractors serve one category.
    /// Built-in extractors use 50.
    fn priority(&self) -> i32 {
        50
    }
}
