//! Format-specific extraction functions.
//!
//! These are plain synchronous functions over decoded bytes. The async
//! [`crate::extractors`] plugins wrap them and decide where they run.

pub mod csv;
pub mod docx;
pub mod excel;
pub mod image;
pub mod pdf;
pub mod structured;
pub mod text;

pub use csv::extract_csv;
pub use docx::extract_word;
pub use excel::{SpreadsheetOptions, extract_spreadsheet};
pub use image::extract_image;
pub use pdf::extract_pdf;
pub use structured::parse_json;
