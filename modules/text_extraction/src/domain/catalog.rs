//! Option catalog: names, defaults and parent relations of every setting

use crate::contract::{
    ExtractionRequestConfig, OptionKey, OptionValue, RotateAngle, ValidationError,
};

/// Kind of value a setting accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Flag,
    Timeout,
    Rotation,
}

impl ValueKind {
    pub fn of(value: &OptionValue) -> Self {
        match value {
            OptionValue::Flag(_) => Self::Flag,
            OptionValue::Timeout(_) => Self::Timeout,
            OptionValue::Rotation(_) => Self::Rotation,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Flag => "a boolean",
            Self::Timeout => "a positive integer number of seconds or null",
            Self::Rotation => "one of 0, 90, 180, 270",
        }
    }
}

impl OptionKey {
    /// All settings in declaration order
    pub const ALL: [OptionKey; 8] = [
        OptionKey::AsPlainText,
        OptionKey::WithOcr,
        OptionKey::Timeout,
        OptionKey::WithBoundingBoxes,
        OptionKey::InlineOcr,
        OptionKey::OcrWithText,
        OptionKey::RotateAngle,
        OptionKey::DetectTables,
    ];

    /// Setting name (snake_case)
    pub fn name(&self) -> &'static str {
        match self {
            Self::AsPlainText => "as_plain_text",
            Self::WithOcr => "with_ocr",
            Self::Timeout => "timeout",
            Self::WithBoundingBoxes => "with_bounding_boxes",
            Self::InlineOcr => "inline_ocr",
            Self::OcrWithText => "ocr_with_text",
            Self::RotateAngle => "rotate_angle",
            Self::DetectTables => "detect_tables",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Timeout => ValueKind::Timeout,
            Self::RotateAngle => ValueKind::Rotation,
            _ => ValueKind::Flag,
        }
    }

    /// Setting that must be enabled for this one to take effect
    pub fn parent(&self) -> Option<OptionKey> {
        match self {
            Self::WithBoundingBoxes | Self::InlineOcr | Self::OcrWithText | Self::DetectTables => {
                Some(Self::WithOcr)
            }
            _ => None,
        }
    }

    /// Settings that depend on this one
    pub fn children(&self) -> impl Iterator<Item = OptionKey> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |key| key.parent() == Some(*self))
    }

    pub fn default_value(&self) -> OptionValue {
        match self {
            Self::AsPlainText => OptionValue::Flag(true),
            Self::Timeout => OptionValue::Timeout(None),
            Self::RotateAngle => OptionValue::Rotation(RotateAngle::Deg0),
            Self::WithOcr
            | Self::WithBoundingBoxes
            | Self::InlineOcr
            | Self::OcrWithText
            | Self::DetectTables => OptionValue::Flag(false),
        }
    }

    pub fn is_default(&self, value: &OptionValue) -> bool {
        self.default_value() == *value
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ExtractionRequestConfig {
    /// Current value of one setting
    pub fn value(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::AsPlainText => OptionValue::Flag(self.as_plain_text),
            OptionKey::WithOcr => OptionValue::Flag(self.with_ocr),
            OptionKey::Timeout => OptionValue::Timeout(self.timeout),
            OptionKey::WithBoundingBoxes => OptionValue::Flag(self.with_bounding_boxes),
            OptionKey::InlineOcr => OptionValue::Flag(self.inline_ocr),
            OptionKey::OcrWithText => OptionValue::Flag(self.ocr_with_text),
            OptionKey::RotateAngle => OptionValue::Rotation(self.rotate_angle),
            OptionKey::DetectTables => OptionValue::Flag(self.detect_tables),
        }
    }

    /// Overwrite one setting; the value kind must match the setting
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<(), ValidationError> {
        match (key, value) {
            (OptionKey::AsPlainText, OptionValue::Flag(flag)) => self.as_plain_text = flag,
            (OptionKey::WithOcr, OptionValue::Flag(flag)) => self.with_ocr = flag,
            (OptionKey::Timeout, OptionValue::Timeout(timeout)) => self.timeout = timeout,
            (OptionKey::WithBoundingBoxes, OptionValue::Flag(flag)) => {
                self.with_bounding_boxes = flag
            }
            (OptionKey::InlineOcr, OptionValue::Flag(flag)) => self.inline_ocr = flag,
            (OptionKey::OcrWithText, OptionValue::Flag(flag)) => self.ocr_with_text = flag,
            (OptionKey::RotateAngle, OptionValue::Rotation(angle)) => self.rotate_angle = angle,
            (OptionKey::DetectTables, OptionValue::Flag(flag)) => self.detect_tables = flag,
            (key, value) => {
                return Err(ValidationError::new(
                    key,
                    format!(
                        "wrong type: expected {}, got {:?}",
                        key.kind().describe(),
                        ValueKind::of(&value)
                    ),
                ))
            }
        }
        Ok(())
    }

    /// Put one setting back to its default
    pub fn reset(&mut self, key: OptionKey) {
        let defaults = Self::default();
        match key {
            OptionKey::AsPlainText => self.as_plain_text = defaults.as_plain_text,
            OptionKey::WithOcr => self.with_ocr = defaults.with_ocr,
            OptionKey::Timeout => self.timeout = defaults.timeout,
            OptionKey::WithBoundingBoxes => self.with_bounding_boxes = defaults.with_bounding_boxes,
            OptionKey::InlineOcr => self.inline_ocr = defaults.inline_ocr,
            OptionKey::OcrWithText => self.ocr_with_text = defaults.ocr_with_text,
            OptionKey::RotateAngle => self.rotate_angle = defaults.rotate_angle,
            OptionKey::DetectTables => self.detect_tables = defaults.detect_tables,
        }
    }

    /// Settings that differ from the catalog default, in declaration order
    pub fn non_default(&self) -> impl Iterator<Item = (OptionKey, OptionValue)> + '_ {
        OptionKey::ALL
            .into_iter()
            .map(|key| (key, self.value(key)))
            .filter(|(key, value)| !key.is_default(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_and_names() {
        let names: Vec<&str> = OptionKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "as_plain_text",
                "with_ocr",
                "timeout",
                "with_bounding_boxes",
                "inline_ocr",
                "ocr_with_text",
                "rotate_angle",
                "detect_tables",
            ]
        );
    }

    #[test]
    fn test_from_name_round_trips() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_name(key.name()), Some(key));
        }
        assert_eq!(OptionKey::from_name("SkipOCR"), None);
    }

    #[test]
    fn test_ocr_children() {
        let children: Vec<OptionKey> = OptionKey::WithOcr.children().collect();
        assert_eq!(
            children,
            vec![
                OptionKey::WithBoundingBoxes,
                OptionKey::InlineOcr,
                OptionKey::OcrWithText,
                OptionKey::DetectTables,
            ]
        );
        assert_eq!(OptionKey::AsPlainText.children().count(), 0);
        assert_eq!(OptionKey::Timeout.parent(), None);
    }

    #[test]
    fn test_defaults_match_config_default() {
        let config = ExtractionRequestConfig::default();
        for key in OptionKey::ALL {
            assert_eq!(config.value(key), key.default_value(), "{}", key);
        }
        assert_eq!(config.non_default().count(), 0);
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut config = ExtractionRequestConfig::default();
        let err = config
            .set(OptionKey::Timeout, OptionValue::Flag(true))
            .unwrap_err();
        assert_eq!(err.setting, "timeout");
        assert!(err.rule.starts_with("wrong type"));

        let err = config
            .set(OptionKey::WithOcr, OptionValue::Rotation(RotateAngle::Deg90))
            .unwrap_err();
        assert_eq!(err.setting, "with_ocr");
        assert_eq!(config, ExtractionRequestConfig::default());
    }

    #[test]
    fn test_set_last_write_wins() {
        let mut config = ExtractionRequestConfig::default();
        config
            .set(OptionKey::RotateAngle, OptionValue::Rotation(RotateAngle::Deg90))
            .unwrap();
        config
            .set(OptionKey::RotateAngle, OptionValue::Rotation(RotateAngle::Deg270))
            .unwrap();
        assert_eq!(config.rotate_angle, RotateAngle::Deg270);
    }
}
