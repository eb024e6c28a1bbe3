//! Dependency resolution between parent and child settings

use crate::contract::{ExtractionRequestConfig, OptionKey, OptionValue};

/// Force every child setting whose parent is disabled back to its default
///
/// Total and order-independent: it only looks at the final value of each
/// parent, never at the order in which settings were supplied.
pub fn resolve(config: &ExtractionRequestConfig) -> ExtractionRequestConfig {
    let mut resolved = *config;

    for key in OptionKey::ALL {
        let Some(parent) = key.parent() else {
            continue;
        };
        if parent_enabled(config, parent) {
            continue;
        }

        let value = config.value(key);
        if key.is_default(&value) {
            continue;
        }

        tracing::debug!(
            setting = key.name(),
            parent = parent.name(),
            value = %value,
            "suppressing option: parent setting is disabled"
        );
        resolved.reset(key);
    }

    resolved
}

fn parent_enabled(config: &ExtractionRequestConfig, parent: OptionKey) -> bool {
    matches!(config.value(parent), OptionValue::Flag(true))
}
