//! Functional options: composable setting transformers applied left to right
//!
//! Repeated options follow "last write wins". Values are validated when the
//! option is applied; the first invalid option aborts with its error.

use crate::contract::{ExtractionRequestConfig, OcrOptions, OptionKey, OptionValue, ValidationError};
use crate::domain::validation::{validate_rotate_angle, validate_timeout};
use std::fmt;

type ApplyFn = dyn Fn(&mut ExtractionRequestConfig) -> Result<(), ValidationError> + Send + Sync;

/// One setting transformer
pub struct ExtractOption {
    name: &'static str,
    apply: Box<ApplyFn>,
}

impl ExtractOption {
    fn new<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&mut ExtractionRequestConfig) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    /// Short name of the option, for logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, config: &mut ExtractionRequestConfig) -> Result<(), ValidationError> {
        (self.apply)(config)
    }
}

impl fmt::Debug for ExtractOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractOption").field("name", &self.name).finish()
    }
}

/// Return plain text
pub fn as_plain_text() -> ExtractOption {
    plain_text(true)
}

/// Return HTML
pub fn as_html() -> ExtractOption {
    plain_text(false)
}

pub fn plain_text(enabled: bool) -> ExtractOption {
    ExtractOption::new("plain_text", move |config| {
        config.as_plain_text = enabled;
        Ok(())
    })
}

/// Timeout in seconds; must be positive
pub fn with_timeout(seconds: i64) -> ExtractOption {
    ExtractOption::new("timeout", move |config| {
        config.timeout = Some(validate_timeout(seconds)?);
        Ok(())
    })
}

pub fn without_timeout() -> ExtractOption {
    ExtractOption::new("timeout", |config| {
        config.timeout = None;
        Ok(())
    })
}

/// Rotation in degrees; one of 0, 90, 180, 270
pub fn with_rotation(degrees: i64) -> ExtractOption {
    ExtractOption::new("rotation", move |config| {
        config.rotate_angle = validate_rotate_angle(degrees)?;
        Ok(())
    })
}

/// Enable OCR together with its sub-features
///
/// Replaces all four OCR sub-feature flags with the values in `ocr`.
pub fn with_ocr(ocr: OcrOptions) -> ExtractOption {
    ExtractOption::new("ocr", move |config| {
        config.with_ocr = true;
        config.inline_ocr = ocr.inline;
        config.with_bounding_boxes = ocr.with_bounding_boxes;
        config.detect_tables = ocr.detect_tables;
        config.ocr_with_text = ocr.ocr_with_text;
        Ok(())
    })
}

/// Disable OCR; sub-feature flags are left alone and suppressed later
pub fn without_ocr() -> ExtractOption {
    ExtractOption::new("ocr", |config| {
        config.with_ocr = false;
        Ok(())
    })
}

/// Set any catalog setting to a typed value
pub fn set(key: OptionKey, value: OptionValue) -> ExtractOption {
    ExtractOption::new(key.name(), move |config| config.set(key, value))
}

/// Apply `options` left to right on top of `config`
pub fn apply_to<I>(
    mut config: ExtractionRequestConfig,
    options: I,
) -> Result<ExtractionRequestConfig, ValidationError>
where
    I: IntoIterator<Item = ExtractOption>,
{
    for option in options {
        tracing::trace!(option = option.name(), "applying extraction option");
        option.apply(&mut config)?;
    }
    Ok(config)
}

/// Apply `options` left to right on top of the defaults
pub fn apply_options<I>(options: I) -> Result<ExtractionRequestConfig, ValidationError>
where
    I: IntoIterator<Item = ExtractOption>,
{
    apply_to(ExtractionRequestConfig::default(), options)
}
