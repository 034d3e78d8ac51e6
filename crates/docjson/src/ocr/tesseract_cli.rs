//! OCR through the `tesseract` executable.
//!
//! Each session owns a private temporary directory. Recognition writes the
//! image there and runs `tesseract <image> stdout -l <lang>`, collecting
//! stdout and stderr together so a noisy engine cannot stall on a full pipe.
//! Terminating the session removes the directory.
//!
//! # System Requirement
//!
//! Tesseract must be installed and on `PATH` (or configured explicitly):
//! - **macOS**: `brew install tesseract`
//! - **Linux**: `apt install tesseract-ocr` or `dnf install tesseract`
//! - **Windows**: `winget install UB-Mannheim.TesseractOCR`

use super::error::OcrError;
use super::session::{DEFAULT_LANGUAGE, OcrEngine, OcrSession};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tempfile::TempDir;

/// Executable name used when no explicit path is configured.
pub const TESSERACT_EXECUTABLE: &str = "tesseract";

/// Spawns the `tesseract` executable for each recognition.
#[derive(Debug, Clone)]
pub struct TesseractCliEngine {
    executable: PathBuf,
}

impl TesseractCliEngine {
    pub fn new(executable: Option<PathBuf>) -> Self {
        Self {
            executable: executable.unwrap_or_else(|| PathBuf::from(TESSERACT_EXECUTABLE)),
        }
    }

    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }
}

impl Default for TesseractCliEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl OcrEngine for TesseractCliEngine {
    fn name(&self) -> &str {
        "tesseract-cli"
    }

    fn acquire(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        let workdir = tempfile::Builder::new()
            .prefix("docjson-ocr-")
            .tempdir()
            .map_err(|e| OcrError::IOError(format!("Failed to create OCR work directory: {}", e)))?;

        Ok(Box::new(TesseractCliSession {
            executable: self.executable.clone(),
            language: DEFAULT_LANGUAGE.to_string(),
            workdir: Some(workdir),
        }))
    }
}

struct TesseractCliSession {
    executable: PathBuf,
    language: String,
    workdir: Option<TempDir>,
}

impl TesseractCliSession {
    fn spawn(&self, input: &std::path::Path) -> Result<Child, OcrError> {
        Command::new(&self.executable)
            .arg(input)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OcrError::EngineUnavailable(format!(
                    "'{}' not found. Install Tesseract or set ocr.tesseract_path",
                    self.executable.display()
                )),
                _ => OcrError::IOError(format!("Failed to start {}: {}", self.executable.display(), e)),
            })
    }
}

impl OcrSession for TesseractCliSession {
    fn set_language(&mut self, language: &str) -> Result<(), OcrError> {
        self.language = language.to_string();
        Ok(())
    }

    fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError> {
        if image.is_empty() {
            return Err(OcrError::ImageProcessingFailed("image is empty".to_string()));
        }

        let input = self
            .workdir
            .as_ref()
            .ok_or(OcrError::SessionClosed)?
            .path()
            .join("input.img");
        std::fs::write(&input, image)
            .map_err(|e| OcrError::IOError(format!("Failed to stage image for OCR: {}", e)))?;

        let output = self
            .spawn(&input)?
            .wait_with_output()
            .map_err(|e| OcrError::ProcessingFailed(format!("Failed to wait for tesseract: {}", e)))?;
        let status = output.status;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(OcrError::ProcessingFailed(if detail.is_empty() {
                format!("tesseract exited with {}", status)
            } else {
                format!("tesseract exited with {}: {}", status, detail)
            }));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| OcrError::ProcessingFailed(format!("tesseract output is not UTF-8: {}", e)))
    }

    fn terminate(&mut self) {
        if let Some(workdir) = self.workdir.take()
            && let Err(e) = workdir.close()
        {
            tracing::warn!("Failed to remove OCR work directory: {}", e);
        }
    }
}

impl Drop for TesseractCliSession {
    fn drop(&mut self) {
        self.terminate();
    }
}
