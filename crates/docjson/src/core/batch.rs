//! Batch driver.
//!
//! Items are converted one at a time, in input order. A failing item either
//! becomes an `{error}` record (with `continue_on_failure`) or stops the batch
//! with [`DocjsonError::BatchAborted`], which keeps every record produced
//! before the failure.

use crate::core::batch_mode::with_batch_mode;
use crate::core::config::ConversionConfig;
use crate::core::pipeline::process_item;
use crate::extractors::ensure_initialized;
use crate::plugins::{ExtractorRegistry, get_extractor_registry};
use crate::types::{InputItem, OutputItem};
use crate::{DocjsonError, Result};
use once_cell::sync::Lazy;

static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create global Tokio runtime - system may be out of resources")
});

/// Convert a batch with the global extractor registry.
///
/// # Example
///
/// ```rust,no_run
/// use docjson::types::{BinaryData, InputItem};
/// use docjson::{ConversionConfig, run};
///
/// # async fn example() -> docjson::Result<()> {
/// let items = vec![InputItem::with_binary(
///     "data",
///     BinaryData::from_bytes(b"a,b\n1,2\n", "text/csv", Some("table.csv".to_string())),
/// )];
/// let output = run(&items, &ConversionConfig::default()).await?;
/// println!("{}", serde_json::to_string_pretty(&output).unwrap());
/// # Ok(())
/// # }
/// ```
pub async fn run(items: &[InputItem], config: &ConversionConfig) -> Result<Vec<OutputItem>> {
    ensure_initialized()?;
    let registry = {
        let registry = get_extractor_registry();
        let guard = registry
            .read()
            .map_err(|e| DocjsonError::Other(format!("Extractor registry lock poisoned: {}", e)))?;
        guard.clone()
    };

    run_with_registry(items, config, &registry).await
}

/// Convert a batch with an explicit set of extractors.
///
/// # Errors
///
/// - `DocjsonError::Validation` if `config` is invalid
/// - `DocjsonError::BatchAborted` for the first failing item when its
///   resolved configuration does not continue on failure
pub async fn run_with_registry(
    items: &[InputItem],
    config: &ConversionConfig,
    registry: &ExtractorRegistry,
) -> Result<Vec<OutputItem>> {
    config.validate()?;

    with_batch_mode(async {
        let mut output = Vec::with_capacity(items.len());

        for (item_index, item) in items.iter().enumerate() {
            let item_config = config.resolve_for(item);

            match process_item(item, &item_config, registry).await {
                Ok(records) => {
                    tracing::debug!(item_index, records = records.len(), "Item converted");
                    output.extend(records.into_iter().map(OutputItem::Record));
                }
                Err(error) if item_config.continue_on_failure => {
                    tracing::warn!(item_index, "Item failed, continuing: {}", error);
                    output.push(OutputItem::Error {
                        error: error.to_string(),
                    });
                }
                Err(error) => {
                    tracing::warn!(item_index, "Item failed, aborting batch: {}", error);
                    return Err(DocjsonError::BatchAborted {
                        item_index,
                        completed: output,
                        source: Box::new(error),
                    });
                }
            }
        }

        Ok(output)
    })
    .await
}

/// Blocking wrapper for [`run`], backed by a shared runtime.
///
/// Must not be called from inside an async context.
pub fn run_sync(items: &[InputItem], config: &ConversionConfig) -> Result<Vec<OutputItem>> {
    GLOBAL_RUNTIME.block_on(run(items, config))
}
