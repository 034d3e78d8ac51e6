//! OCR engines for image inputs.
//!
//! The default engine shells out to the `tesseract` executable. Building with
//! the `ocr-native` feature adds an in-process engine backed by libtesseract.

pub mod error;
#[cfg(feature = "ocr-native")]
pub mod native;
pub mod session;
pub mod tesseract_cli;

pub use error::OcrError;
#[cfg(feature = "ocr-native")]
pub use native::NativeTesseractEngine;
pub use session::{OcrEngine, OcrLease, OcrSession, recognize_image};
pub use tesseract_cli::TesseractCliEngine;

use crate::core::config::{OcrConfig, OcrEngineKind};
use std::sync::Arc;

/// Build the engine selected by `config`.
///
/// # Errors
///
/// Returns `OcrError::EngineUnavailable` when the native engine is requested
/// but the crate was built without `ocr-native`.
pub fn engine_for(config: &OcrConfig) -> Result<Arc<dyn OcrEngine>, OcrError> {
    match config.engine {
        OcrEngineKind::TesseractCli => Ok(Arc::new(TesseractCliEngine::new(config.tesseract_path.clone()))),
        #[cfg(feature = "ocr-native")]
        OcrEngineKind::TesseractNative => Ok(Arc::new(NativeTesseractEngine)),
        #[cfg(not(feature = "ocr-native"))]
        OcrEngineKind::TesseractNative => Err(OcrError::EngineUnavailable(
            "docjson was built without the `ocr-native` feature".to_string(),
        )),
    }
}
