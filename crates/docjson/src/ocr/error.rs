use std::fmt;

/// OCR-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// The engine could not be started (executable missing, library not built in).
    EngineUnavailable(String),
    TesseractInitializationFailed(String),
    InvalidLanguageCode(String),
    ImageProcessingFailed(String),
    ProcessingFailed(String),
    /// The session was used after it was terminated.
    SessionClosed,
    IOError(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EngineUnavailable(msg) => write!(f, "OCR engine unavailable: {}", msg),
            Self::TesseractInitializationFailed(msg) => {
                write!(f, "Tesseract initialization failed: {}", msg)
            }
            Self::InvalidLanguageCode(msg) => write!(f, "Invalid language code: {}", msg),
            Self::ImageProcessingFailed(msg) => write!(f, "Image processing failed: {}", msg),
            Self::ProcessingFailed(msg) => write!(f, "OCR processing failed: {}", msg),
            Self::SessionClosed => write!(f, "OCR session already terminated"),
            Self::IOError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for OcrError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            OcrError::InvalidLanguageCode("e n g".to_string()).to_string(),
            "Invalid language code: e n g"
        );
        assert_eq!(
            OcrError::ProcessingFailed("exit status 1".to_string()).to_string(),
            "OCR processing failed: exit status 1"
        );
        assert_eq!(OcrError::SessionClosed.to_string(), "OCR session already terminated");
    }

    #[test]
    fn test_converts_to_extraction_failed() {
        let err: crate::DocjsonError = OcrError::EngineUnavailable("tesseract not found".to_string()).into();
        assert!(matches!(err, crate::DocjsonError::ExtractionFailed { .. }));
        assert!(err.to_string().contains("tesseract not found"));
    }
}
