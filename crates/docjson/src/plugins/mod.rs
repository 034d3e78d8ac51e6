//! Plugin system.
//!
//! Every format category is served by a [`DocumentExtractor`] resolved from an
//! [`ExtractorRegistry`]. The built-in extractors live in [`crate::extractors`];
//! custom ones can replace them by registering with a higher priority.

pub mod extractor;
pub mod registry;
pub mod traits;

pub use extractor::DocumentExtractor;
pub use registry::{ExtractorRegistry, get_extractor_registry};
pub use traits::Plugin;
