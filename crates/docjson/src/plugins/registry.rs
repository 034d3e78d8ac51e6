//! Extractor registry.

use crate::plugins::DocumentExtractor;
use crate::types::FormatCategory;
use crate::{DocjsonError, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DocjsonError::validation("Plugin name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(DocjsonError::validation(format!(
            "Plugin name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Extractors keyed by format category, highest priority first.
///
/// Cloning is cheap: extractors are shared through `Arc`.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<FormatCategory, BTreeMap<i32, Arc<dyn DocumentExtractor>>>,
    name_index: HashMap<String, (FormatCategory, i32)>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extractor for its category.
    ///
    /// An extractor with the same category and priority replaces the previous
    /// one. Registering a name twice replaces the earlier registration.
    ///
    /// # Errors
    ///
    /// - `DocjsonError::Validation` for an empty or whitespace-containing name
    /// - any error returned by the extractor's `initialize`
    pub fn register(&mut self, extractor: Arc<dyn DocumentExtractor>) -> Result<()> {
        let name = extractor.name().to_string();
        let category = extractor.category();
        let priority = extractor.priority();

        validate_plugin_name(&name)?;
        if category == FormatCategory::Unsupported {
            return Err(DocjsonError::validation(format!(
                "Extractor '{}' cannot be registered for the unsupported category",
                name
            )));
        }

        self.remove(&name)?;
        extractor.initialize()?;

        if let Some(displaced) = self.extractors.entry(category).or_default().insert(priority, extractor) {
            self.name_index.remove(displaced.name());
            displaced.shutdown()?;
        }
        self.name_index.insert(name, (category, priority));

        Ok(())
    }

    /// The highest priority extractor for `category`.
    pub fn get(&self, category: FormatCategory) -> Option<Arc<dyn DocumentExtractor>> {
        self.extractors
            .get(&category)
            .and_then(|by_priority| by_priority.values().next_back())
            .map(Arc::clone)
    }

    /// Names of all registered extractors, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.name_index.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.name_index.is_empty()
    }

    /// Remove an extractor by name and shut it down. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let Some((category, priority)) = self.name_index.remove(name) else {
            return Ok(());
        };

        let mut removed = None;
        if let Some(by_priority) = self.extractors.get_mut(&category) {
            removed = by_priority.remove(&priority);
            if by_priority.is_empty() {
                self.extractors.remove(&category);
            }
        }

        if let Some(extractor) = removed {
            extractor.shutdown()?;
        }

        Ok(())
    }

    /// Shut down all extractors and clear the registry.
    pub fn shutdown_all(&mut self) -> Result<()> {
        for name in self.list() {
            self.remove(&name)?;
        }
        Ok(())
    }
}

/// Process-wide extractor registry used by [`crate::run`].
pub static EXTRACTOR_REGISTRY: Lazy<Arc<RwLock<ExtractorRegistry>>> =
    Lazy::new(|| Arc::new(RwLock::new(ExtractorRegistry::new())));

/// Get the global extractor registry.
pub fn get_extractor_registry() -> Arc<RwLock<ExtractorRegistry>> {
    EXTRACTOR_REGISTRY.clone()
}
