//! Conversion orchestration.
//!
//! - **Decoder** (`io`): base64 attachments to bytes, items from files
//! - **Classifier** (`mime`): (MIME type, file name) to format category
//! - **Normalizer** (`normalize`): extraction results to output records
//! - **Pipeline** (`pipeline`): one item end to end
//! - **Batch Driver** (`batch`): items in order with the failure policy
//! - **Configuration** (`config`): options, file loading, per-item overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use docjson::core::config::ConversionConfig;
//! use docjson::core::io::item_from_path;
//!
//! # async fn example() -> docjson::Result<()> {
//! let item = item_from_path("report.xlsx", "data", None).await?;
//! let config = ConversionConfig {
//!     separate_sheets: true,
//!     ..Default::default()
//! };
//! let output = docjson::run(&[item], &config).await?;
//! println!("{} records", output.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod batch_mode;
pub mod config;
pub mod io;
pub mod mime;
pub mod normalize;
pub mod pipeline;

pub use batch::{run, run_sync, run_with_registry};
pub use config::{ConfigOverrides, ConversionConfig, OcrConfig, OcrEngineKind};
pub use mime::classify;
pub use normalize::normalize;
pub use pipeline::process_item;
