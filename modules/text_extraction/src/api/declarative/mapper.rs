//! Conversions between the declarative DTO and the contract config

use super::dto::ExtractionConfigDto;
use super::error::DeclarativeError;
use crate::contract::{
    CanonicalSettings, ExtractionRequestConfig, OptionKey, OptionValue, ValidationError,
};
use crate::domain::validation::validate_value;
use serde_json::Value;

impl ExtractionConfigDto {
    fn fields(&self) -> [(OptionKey, Option<&Value>); 8] {
        [
            (OptionKey::AsPlainText, self.as_plain_text.as_ref()),
            (OptionKey::WithOcr, self.with_ocr.as_ref()),
            (OptionKey::Timeout, self.timeout.as_ref()),
            (OptionKey::WithBoundingBoxes, self.with_bounding_boxes.as_ref()),
            (OptionKey::InlineOcr, self.inline_ocr.as_ref()),
            (OptionKey::OcrWithText, self.ocr_with_text.as_ref()),
            (OptionKey::RotateAngle, self.rotate_angle.as_ref()),
            (OptionKey::DetectTables, self.detect_tables.as_ref()),
        ]
    }

    fn field_mut(&mut self, key: OptionKey) -> &mut Option<Value> {
        match key {
            OptionKey::AsPlainText => &mut self.as_plain_text,
            OptionKey::WithOcr => &mut self.with_ocr,
            OptionKey::Timeout => &mut self.timeout,
            OptionKey::WithBoundingBoxes => &mut self.with_bounding_boxes,
            OptionKey::InlineOcr => &mut self.inline_ocr,
            OptionKey::OcrWithText => &mut self.ocr_with_text,
            OptionKey::RotateAngle => &mut self.rotate_angle,
            OptionKey::DetectTables => &mut self.detect_tables,
        }
    }
}

impl TryFrom<ExtractionConfigDto> for ExtractionRequestConfig {
    type Error = ValidationError;

    fn try_from(dto: ExtractionConfigDto) -> Result<Self, Self::Error> {
        let mut config = ExtractionRequestConfig::default();
        for (key, raw) in dto.fields() {
            if let Some(raw) = raw {
                config.set(key, validate_value(key, raw)?)?;
            }
        }
        Ok(config)
    }
}

/// Minimal document: only the canonical (non-default) settings
impl From<&CanonicalSettings> for ExtractionConfigDto {
    fn from(settings: &CanonicalSettings) -> Self {
        let mut dto = Self::default();
        for (key, value) in settings.iter() {
            let raw = match value {
                OptionValue::Flag(flag) => Value::from(flag),
                OptionValue::Timeout(Some(timeout)) => Value::from(timeout.seconds()),
                OptionValue::Timeout(None) => Value::Null,
                OptionValue::Rotation(angle) => Value::from(angle.degrees()),
            };
            *dto.field_mut(key) = Some(raw);
        }
        dto
    }
}

impl ExtractionRequestConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(input: &str) -> Result<Self, DeclarativeError> {
        let dto = ExtractionConfigDto::from_json_str(input)?;
        Ok(Self::try_from(dto)?)
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(input: &str) -> Result<Self, DeclarativeError> {
        let dto = ExtractionConfigDto::from_yaml_str(input)?;
        Ok(Self::try_from(dto)?)
    }
}
