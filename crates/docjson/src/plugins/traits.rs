//! Base trait shared by every plugin.

use crate::Result;

/// Lifecycle and identity of a plugin.
///
/// Plugins are stored as `Arc<dyn ...>` in registries and may be called from
/// several tasks at once, hence `Send + Sync`.
pub trait Plugin: Send + Sync {
    /// Unique, whitespace-free identifier.
    fn name(&self) -> &str;

    fn version(&self) -> String;

    /// Called once when the plugin is registered.
    fn initialize(&self) -> Result<()>;

    /// Called when the plugin is removed from its registry.
    fn shutdown(&self) -> Result<()>;

    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct RecordingPlugin {
        active: AtomicBool,
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &str {
            "recording"
        }

        fn version(&self) -> String {
            "0.1.0".to_string()
        }

        fn initialize(&self) -> Result<()> {
            self.active.store(true, Ordering::Release);
            Ok(())
        }

        fn shutdown(&self) -> Result<()> {
            self.active.store(false, Ordering::Release);
            Ok(())
        }
    }

    #[test]
    fn test_plugin_lifecycle() {
        let plugin = RecordingPlugin {
            active: AtomicBool::new(false),
        };
        assert_eq!(plugin.description(), "");

        plugin.initialize().unwrap();
        assert!(plugin.active.load(Ordering::Acquire));

        plugin.shutdown().unwrap();
        assert!(!plugin.active.load(Ordering::Acquire));
    }
}
