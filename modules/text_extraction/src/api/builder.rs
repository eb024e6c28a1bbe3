//! Fluent builder for extraction options
//!
//! The builder owns its accumulator and is consumed by every step. The first
//! invalid value is remembered and returned from [`ExtractionRequestBuilder::build`];
//! later steps are ignored once an error is recorded.

use super::functional::ExtractOption;
use crate::contract::{ExtractionRequestConfig, OcrOptions, ValidationError};
use crate::domain::validation::{validate_rotate_angle, validate_timeout};

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build()` is called"]
pub struct ExtractionRequestBuilder {
    state: Result<ExtractionRequestConfig, ValidationError>,
}

impl Default for ExtractionRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionRequestBuilder {
    pub fn new() -> Self {
        Self::from_config(ExtractionRequestConfig::default())
    }

    /// Continue from an existing configuration
    pub fn from_config(config: ExtractionRequestConfig) -> Self {
        Self { state: Ok(config) }
    }

    fn update<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ExtractionRequestConfig) -> Result<(), ValidationError>,
    {
        if let Ok(config) = &mut self.state {
            if let Err(e) = f(config) {
                self.state = Err(e);
            }
        }
        self
    }

    pub fn as_plain_text(self, enabled: bool) -> Self {
        self.update(|c| {
            c.as_plain_text = enabled;
            Ok(())
        })
    }

    /// Enable OCR and replace all sub-feature flags with `ocr`
    pub fn with_ocr(self, ocr: OcrOptions) -> Self {
        self.update(|c| {
            c.with_ocr = true;
            c.inline_ocr = ocr.inline;
            c.with_bounding_boxes = ocr.with_bounding_boxes;
            c.detect_tables = ocr.detect_tables;
            c.ocr_with_text = ocr.ocr_with_text;
            Ok(())
        })
    }

    /// Toggle OCR without touching sub-feature flags
    pub fn ocr(self, enabled: bool) -> Self {
        self.update(|c| {
            c.with_ocr = enabled;
            Ok(())
        })
    }

    pub fn with_bounding_boxes(self, enabled: bool) -> Self {
        self.update(|c| {
            c.with_bounding_boxes = enabled;
            Ok(())
        })
    }

    pub fn inline_ocr(self, enabled: bool) -> Self {
        self.update(|c| {
            c.inline_ocr = enabled;
            Ok(())
        })
    }

    pub fn ocr_with_text(self, enabled: bool) -> Self {
        self.update(|c| {
            c.ocr_with_text = enabled;
            Ok(())
        })
    }

    pub fn detect_tables(self, enabled: bool) -> Self {
        self.update(|c| {
            c.detect_tables = enabled;
            Ok(())
        })
    }

    /// Timeout in seconds; must be positive
    pub fn timeout(self, seconds: i64) -> Self {
        self.update(|c| {
            c.timeout = Some(validate_timeout(seconds)?);
            Ok(())
        })
    }

    pub fn no_timeout(self) -> Self {
        self.update(|c| {
            c.timeout = None;
            Ok(())
        })
    }

    /// Rotation in degrees; one of 0, 90, 180, 270
    pub fn rotate(self, degrees: i64) -> Self {
        self.update(|c| {
            c.rotate_angle = validate_rotate_angle(degrees)?;
            Ok(())
        })
    }

    /// Apply a functional option as one step of the chain
    pub fn option(self, option: ExtractOption) -> Self {
        self.update(|c| option.apply(c))
    }

    pub fn build(self) -> Result<ExtractionRequestConfig, ValidationError> {
        self.state
    }
}

impl ExtractionRequestConfig {
    pub fn builder() -> ExtractionRequestBuilder {
        ExtractionRequestBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::functional;
    use crate::contract::RotateAngle;

    #[test]
    fn test_empty_builder_is_default() {
        let config = ExtractionRequestBuilder::new().build().unwrap();
        assert_eq!(config, ExtractionRequestConfig::default());
    }

    #[test]
    fn test_chain() {
        let config = ExtractionRequestConfig::builder()
            .with_ocr(OcrOptions::new().with_bounding_boxes(true).inline(true))
            .timeout(30)
            .rotate(90)
            .as_plain_text(true)
            .build()
            .unwrap();
        assert!(config.with_ocr);
        assert!(config.with_bounding_boxes);
        assert!(config.inline_ocr);
        assert_eq!(config.rotate_angle, RotateAngle::Deg90);
        assert_eq!(config.timeout.map(|t| t.seconds()), Some(30));
    }

    #[test]
    fn test_first_error_wins() {
        let err = ExtractionRequestBuilder::new()
            .rotate(91)
            .timeout(0)
            .rotate(90)
            .build()
            .unwrap_err();
        assert_eq!(err.setting, "rotate_angle");
    }

    #[test]
    fn test_child_before_parent_is_honored() {
        let early = ExtractionRequestBuilder::new()
            .detect_tables(true)
            .ocr(true)
            .build()
            .unwrap();
        let late = ExtractionRequestBuilder::new()
            .ocr(true)
            .detect_tables(true)
            .build()
            .unwrap();
        assert_eq!(early.to_headers().unwrap(), late.to_headers().unwrap());
        assert!(early.to_headers().unwrap().contains("detect_tables"));
    }

    #[test]
    fn test_option_step() {
        let config = ExtractionRequestBuilder::new()
            .option(functional::with_timeout(5))
            .option(functional::as_html())
            .build()
            .unwrap();
        assert!(!config.as_plain_text);
        assert_eq!(config.timeout.map(|t| t.seconds()), Some(5));

        let err = ExtractionRequestBuilder::new()
            .option(functional::with_rotation(1))
            .build()
            .unwrap_err();
        assert_eq!(err.setting, "rotate_angle");
    }
}
