//! Named-parameter style: one struct of plain values per call

use crate::contract::{ExtractionRequestConfig, ValidationError};
use crate::domain::validation::{validate_rotate_angle, validate_timeout};

/// Plain, unvalidated parameters for a single extraction call
///
/// Start from `GetTextParams::default()` and override what you need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTextParams {
    /// Return plain text (`true`) or HTML (`false`)
    pub as_plain_text: bool,
    /// Use OCR
    pub with_ocr: bool,
    /// OCR timeout in seconds; must be positive when set
    pub timeout: Option<i64>,
    /// Return bounding boxes (OCR only)
    pub with_bounding_boxes: bool,
    /// Inline OCR (OCR only)
    pub inline_ocr: bool,
    /// OCR on regions that already carry text (OCR only)
    pub ocr_with_text: bool,
    /// One of 0, 90, 180, 270
    pub rotate_angle: i64,
    /// Detect tables (OCR only)
    pub detect_tables: bool,
}

impl Default for GetTextParams {
    fn default() -> Self {
        Self {
            as_plain_text: true,
            with_ocr: false,
            timeout: None,
            with_bounding_boxes: false,
            inline_ocr: false,
            ocr_with_text: false,
            rotate_angle: 0,
            detect_tables: false,
        }
    }
}

impl TryFrom<GetTextParams> for ExtractionRequestConfig {
    type Error = ValidationError;

    fn try_from(params: GetTextParams) -> Result<Self, Self::Error> {
        Ok(Self {
            as_plain_text: params.as_plain_text,
            with_ocr: params.with_ocr,
            timeout: params.timeout.map(validate_timeout).transpose()?,
            with_bounding_boxes: params.with_bounding_boxes,
            inline_ocr: params.inline_ocr,
            ocr_with_text: params.ocr_with_text,
            rotate_angle: validate_rotate_angle(params.rotate_angle)?,
            detect_tables: params.detect_tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::RotateAngle;

    #[test]
    fn test_default_params_match_default_config() {
        let config = ExtractionRequestConfig::try_from(GetTextParams::default()).unwrap();
        assert_eq!(config, ExtractionRequestConfig::default());
    }

    #[test]
    fn test_params_are_validated() {
        let err = ExtractionRequestConfig::try_from(GetTextParams {
            timeout: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.setting, "timeout");

        let err = ExtractionRequestConfig::try_from(GetTextParams {
            rotate_angle: 45,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.setting, "rotate_angle");
    }

    #[test]
    fn test_params_convert_values() {
        let config = ExtractionRequestConfig::try_from(GetTextParams {
            with_ocr: true,
            timeout: Some(30),
            rotate_angle: 270,
            detect_tables: true,
            ..Default::default()
        })
        .unwrap();
        assert!(config.with_ocr);
        assert!(config.detect_tables);
        assert_eq!(config.timeout.map(|t| t.seconds()), Some(30));
        assert_eq!(config.rotate_angle, RotateAngle::Deg270);
    }
}
