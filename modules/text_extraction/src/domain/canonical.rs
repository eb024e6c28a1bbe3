//! Default omission: reduce a resolved config to its non-default settings

use crate::contract::{
    CanonicalSettings, ExtractionRequestConfig, OptionKey, OptionValue, ValidationError,
};

/// Keep only settings whose value differs from the catalog default
pub fn canonicalize(resolved: &ExtractionRequestConfig) -> CanonicalSettings {
    CanonicalSettings::from_entries(resolved.non_default().collect())
}

impl CanonicalSettings {
    /// Stored value, or the catalog default when the setting was omitted
    pub fn effective(&self, key: OptionKey) -> OptionValue {
        self.get(key).unwrap_or_else(|| key.default_value())
    }

    /// Rebuild the full configuration this canonical form stands for
    pub fn to_config(&self) -> Result<ExtractionRequestConfig, ValidationError> {
        let mut config = ExtractionRequestConfig::default();
        for (key, value) in self.iter() {
            config.set(key, value)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::RotateAngle;
    use crate::domain::resolver::resolve;

    #[test]
    fn test_defaults_canonicalize_to_empty() {
        let canonical = canonicalize(&ExtractionRequestConfig::default());
        assert!(canonical.is_empty());
        assert_eq!(canonical.effective(OptionKey::AsPlainText), OptionValue::Flag(true));
        assert_eq!(canonical.effective(OptionKey::WithOcr), OptionValue::Flag(false));
    }

    #[test]
    fn test_only_non_defaults_kept_in_catalog_order() {
        let config = ExtractionRequestConfig {
            detect_tables: true,
            rotate_angle: RotateAngle::Deg90,
            with_ocr: true,
            as_plain_text: false,
            ..Default::default()
        };
        let canonical = canonicalize(&resolve(&config));
        let keys: Vec<OptionKey> = canonical.keys().collect();
        assert_eq!(
            keys,
            vec![
                OptionKey::AsPlainText,
                OptionKey::WithOcr,
                OptionKey::RotateAngle,
                OptionKey::DetectTables,
            ]
        );
        assert_eq!(canonical.get(OptionKey::AsPlainText), Some(OptionValue::Flag(false)));
        assert_eq!(canonical.get(OptionKey::Timeout), None);
    }

    #[test]
    fn test_canonical_form_is_fixed_point() {
        let config = ExtractionRequestConfig {
            with_ocr: true,
            inline_ocr: true,
            rotate_angle: RotateAngle::Deg270,
            ..Default::default()
        };
        let canonical = canonicalize(&resolve(&config));
        let again = canonicalize(&resolve(&canonical.to_config().unwrap()));
        assert_eq!(again, canonical);
    }
}
