//! Error types for docjson.
//!
//! Every fallible operation in the crate returns [`DocjsonError`]. The variants
//! mirror the failure points of the conversion pipeline:
//!
//! - `MissingBinaryData` - the configured attachment is absent on an item
//! - `UnsupportedFormat` - the classifier fell through every rule
//! - `ExtractionFailed` - an engine rejected the payload (corrupt, encrypted, malformed)
//! - `Decode` - base64, UTF-8 or JSON decoding failed
//! - `Validation` - invalid configuration
//! - `Io` - file system errors from file-based entry points (always bubble up unchanged)
//! - `BatchAborted` - a batch stopped at a failing item while `continue_on_failure` was off
//!
//! # Example
//!
//! ```rust
//! use docjson::{DocjsonError, Result};
//!
//! fn require_text(bytes: &[u8]) -> Result<&str> {
//!     std::str::from_utf8(bytes).map_err(|e| DocjsonError::decode_with_source("payload is not UTF-8", e))
//! }
//!
//! assert!(require_text(b"hello").is_ok());
//! assert!(require_text(&[0xff, 0xfe]).is_err());
//! ```
use crate::types::OutputItem;
use thiserror::Error;

/// Result type alias using `DocjsonError`.
pub type Result<T> = std::result::Result<T, DocjsonError>;

/// Main error type for all docjson operations.
#[derive(Debug, Error)]
pub enum DocjsonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No binary data found in property \"{property}\"")]
    MissingBinaryData { property: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {message}")]
    ExtractionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The batch stopped at `item_index`. `completed` holds every record produced
    /// by the items before it, in order.
    #[error("{source}")]
    BatchAborted {
        item_index: usize,
        completed: Vec<OutputItem>,
        #[source]
        source: Box<DocjsonError>,
    },

    #[error("{0}")]
    Other(String),
}

impl From<calamine::Error> for DocjsonError {
    fn from(err: calamine::Error) -> Self {
        DocjsonError::ExtractionFailed {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for DocjsonError {
    fn from(err: lopdf::Error) -> Self {
        DocjsonError::ExtractionFailed {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for DocjsonError {
    fn from(err: serde_json::Error) -> Self {
        DocjsonError::Decode {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<base64::DecodeError> for DocjsonError {
    fn from(err: base64::DecodeError) -> Self {
        DocjsonError::Decode {
            message: format!("invalid base64 payload: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::string::FromUtf8Error> for DocjsonError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DocjsonError::Decode {
            message: format!("payload is not valid UTF-8: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::ocr::OcrError> for DocjsonError {
    fn from(err: crate::ocr::OcrError) -> Self {
        DocjsonError::ExtractionFailed {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DocjsonError {
    error_constructor!(extraction_failed, ExtractionFailed);
    error_constructor!(decode, Decode);
    error_constructor!(validation, Validation);

    pub fn missing_binary_data<S: Into<String>>(property: S) -> Self {
        Self::MissingBinaryData {
            property: property.into(),
        }
    }

    /// The error that caused a failure, looking through `BatchAborted`.
    pub fn root(&self) -> &DocjsonError {
        match self {
            Self::BatchAborted { source, .. } => source.root(),
            other => other,
        }
    }
}
