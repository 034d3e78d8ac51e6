//! docjson - convert uploaded files into normalized JSON records.
//!
//! Each input item carries a base64 attachment with a MIME type and file name.
//! The attachment is classified (PDF, Word, spreadsheet, CSV, image, JSON or
//! text), run through the matching extractor and flattened into one or more
//! JSON records. Batches run item by item with a configurable failure policy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docjson::types::{BinaryData, InputItem};
//! use docjson::{ConversionConfig, run_sync};
//!
//! # fn main() -> docjson::Result<()> {
//! let items = vec![InputItem::with_binary(
//!     "data",
//!     BinaryData::from_bytes(br#"{"id": 7}"#, "application/json", Some("record.json".to_string())),
//! )];
//! let output = run_sync(&items, &ConversionConfig::default())?;
//! println!("{}", serde_json::to_string(&output).unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core** (`core`): decoding, classification, normalization, the per-item
//!   pipeline, the batch driver and configuration
//! - **Extraction** (`extraction`): synchronous format parsers
//! - **Extractors** (`extractors`): built-in `DocumentExtractor` plugins
//! - **Plugins** (`plugins`): plugin traits and the extractor registry
//! - **OCR** (`ocr`): Tesseract engines with scoped sessions

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod ocr;
pub mod plugins;
pub mod types;

pub use error::{DocjsonError, Result};
pub use types::*;

pub use crate::core::batch::{run, run_sync, run_with_registry};
pub use crate::core::config::{ConfigOverrides, ConversionConfig, OcrConfig, OcrEngineKind};
pub use crate::core::mime::classify;
