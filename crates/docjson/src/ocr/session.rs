//! OCR engine sessions and their lifecycle.
//!
//! A recognition always runs as acquire → set language → recognize → release.
//! [`OcrLease`] owns the session and terminates it when dropped, so the engine
//! is released on every exit path, including errors and panics.

use super::error::OcrError;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// A live OCR session. Methods are blocking.
pub trait OcrSession: Send {
    /// Select the recognition language (e.g. `"eng"`, `"deu+eng"`).
    fn set_language(&mut self, language: &str) -> Result<(), OcrError>;

    /// Recognize text in an encoded image (PNG, JPEG, TIFF, ...).
    fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError>;

    /// Release every resource held by the session. Must be idempotent.
    fn terminate(&mut self);
}

/// Factory for OCR sessions.
pub trait OcrEngine: Send + Sync {
    fn name(&self) -> &str;

    fn acquire(&self) -> Result<Box<dyn OcrSession>, OcrError>;
}

/// Scoped ownership of an [`OcrSession`].
pub struct OcrLease {
    session: Option<Box<dyn OcrSession>>,
}

impl OcrLease {
    pub fn acquire(engine: &dyn OcrEngine) -> Result<Self, OcrError> {
        tracing::debug!(engine = engine.name(), "Acquiring OCR session");
        Ok(Self {
            session: Some(engine.acquire()?),
        })
    }

    pub fn set_language(&mut self, language: &str) -> Result<(), OcrError> {
        validate_language(language)?;
        self.session_mut()?.set_language(language)
    }

    pub fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError> {
        self.session_mut()?.recognize(image)
    }

    /// Terminate the session now.
    pub fn release(mut self) {
        self.terminate();
    }

    fn session_mut(&mut self) -> Result<&mut Box<dyn OcrSession>, OcrError> {
        self.session.as_mut().ok_or(OcrError::SessionClosed)
    }

    fn terminate(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.terminate();
            tracing::debug!("OCR session released");
        }
    }
}

impl Drop for OcrLease {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// Run one full recognition against `engine`.
pub fn recognize_image(engine: &dyn OcrEngine, image: &[u8], language: &str) -> Result<String, OcrError> {
    let mut lease = OcrLease::acquire(engine)?;
    lease.set_language(language)?;
    let text = lease.recognize(image)?;
    lease.release();
    Ok(text)
}

/// Check a Tesseract language string: one or more codes joined by `+`.
pub fn validate_language(language: &str) -> Result<(), OcrError> {
    let valid = !language.is_empty()
        && language
            .split('+')
            .all(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));

    if valid {
        Ok(())
    } else {
        Err(OcrError::InvalidLanguageCode(language.to_string()))
    }
}
