//! Batch mode tracking using tokio task-local storage.
//!
//! The batch driver sets this flag for the duration of a run. Extractors check
//! it to decide whether CPU-heavy parsing moves to `spawn_blocking`.

use std::cell::Cell;
use tokio::task_local;

task_local! {
    static BATCH_MODE: Cell<bool>;
}

/// Whether the current task runs inside a batch.
///
/// Returns `false` if the task-local is not set.
pub fn is_batch_mode() -> bool {
    BATCH_MODE.try_with(|cell| cell.get()).unwrap_or(false)
}

/// Run a future with batch mode enabled.
pub async fn with_batch_mode<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    BATCH_MODE.scope(Cell::new(true), future).await
}

/// Run CPU-heavy work over `content`.
///
/// In batch mode the content is copied and `work` runs on the blocking pool
/// inside the caller's tracing span. Otherwise it runs inline.
///
/// # Errors
///
/// Returns `DocjsonError::Other` if the blocking task panicked.
pub async fn run_blocking<F, T>(content: &[u8], work: F) -> crate::Result<T>
where
    F: FnOnce(&[u8]) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    if is_batch_mode() {
        let content_owned = content.to_vec();
        let span = tracing::Span::current();
        tokio::task::spawn_blocking(move || {
            let _guard = span.entered();
            work(&content_owned)
        })
        .await
        .map_err(|e| crate::DocjsonError::Other(format!("Extraction task failed: {}", e)))?
    } else {
        work(content)
    }
}
