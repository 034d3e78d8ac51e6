//! In-process OCR through libtesseract.

use super::error::OcrError;
use super::session::{DEFAULT_LANGUAGE, OcrEngine, OcrSession};
use kreuzberg_tesseract::TesseractAPI;
use std::env;
use std::path::Path;

const TESSDATA_FALLBACK_PATHS: &[&str] = &[
    "/opt/homebrew/share/tessdata",
    "/opt/homebrew/opt/tesseract/share/tessdata",
    "/usr/local/opt/tesseract/share/tessdata",
    "/usr/share/tesseract-ocr/5/tessdata",
    "/usr/share/tesseract-ocr/4/tessdata",
    "/usr/share/tessdata",
    "/usr/local/share/tessdata",
    r#"C:\Program Files\Tesseract-OCR\tessdata"#,
    r#"C:\ProgramData\Tesseract-OCR\tessdata"#,
];

/// Locate the tessdata directory: `TESSDATA_PREFIX`, then well-known install paths.
pub fn resolve_tessdata_path() -> String {
    env::var("TESSDATA_PREFIX")
        .ok()
        .or_else(|| {
            TESSDATA_FALLBACK_PATHS
                .iter()
                .find(|p| Path::new(p).exists())
                .map(|p| (*p).to_string())
        })
        .unwrap_or_default()
}

/// Runs Tesseract through the linked library.
#[derive(Debug, Clone, Default)]
pub struct NativeTesseractEngine;

impl OcrEngine for NativeTesseractEngine {
    fn name(&self) -> &str {
        "tesseract-native"
    }

    fn acquire(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        tracing::debug!(version = %TesseractAPI::version(), "Using native Tesseract");
        Ok(Box::new(NativeSession {
            tessdata_path: resolve_tessdata_path(),
            language: DEFAULT_LANGUAGE.to_string(),
            open: true,
        }))
    }
}

/// The API handle is created per recognition on the calling thread, so the
/// session itself holds only plain data.
struct NativeSession {
    tessdata_path: String,
    language: String,
    open: bool,
}

impl OcrSession for NativeSession {
    fn set_language(&mut self, language: &str) -> Result<(), OcrError> {
        if !self.tessdata_path.is_empty() {
            let traineddata = Path::new(&self.tessdata_path).join(format!("{}.traineddata", language));
            if !language.contains('+') && !traineddata.exists() {
                return Err(OcrError::InvalidLanguageCode(format!(
                    "no traineddata for '{}' in {}",
                    language, self.tessdata_path
                )));
            }
        }
        self.language = language.to_string();
        Ok(())
    }

    fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError> {
        if !self.open {
            return Err(OcrError::SessionClosed);
        }

        let rgb_image = image::load_from_memory(image)
            .map_err(|e| OcrError::ImageProcessingFailed(format!("Failed to decode image: {}", e)))?
            .to_rgb8();
        let (width, height) = rgb_image.dimensions();
        let bytes_per_pixel = 3;
        let bytes_per_line = width * bytes_per_pixel;

        let api = TesseractAPI::new();
        api.init(&self.tessdata_path, &self.language).map_err(|e| {
            OcrError::TesseractInitializationFailed(format!(
                "language={} datapath='{}': {}",
                self.language, self.tessdata_path, e
            ))
        })?;

        api.set_image(
            rgb_image.as_raw(),
            width as i32,
            height as i32,
            bytes_per_pixel as i32,
            bytes_per_line as i32,
        )
        .map_err(|e| OcrError::ProcessingFailed(format!("Failed to set image: {}", e)))?;

        api.recognize()
            .map_err(|e| OcrError::ProcessingFailed(format!("Failed to recognize text: {}", e)))?;

        api.get_utf8_text()
            .map_err(|e| OcrError::ProcessingFailed(format!("Failed to extract text: {}", e)))
    }

    fn terminate(&mut self) {
        self.open = false;
    }
}
