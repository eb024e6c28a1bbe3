//! Finalize step shared by every construction style
//!
//! resolve -> canonicalize -> serialize. Validation already happened when the
//! typed config was built.

use super::{canonical::canonicalize, headers::serialize, resolver::resolve};
use crate::contract::{
    CanonicalHeaderSet, CanonicalSettings, Document, ExtractionError, ExtractionRequestConfig,
    PreparedRequest,
};

/// Result of normalizing one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub settings: CanonicalSettings,
    pub headers: CanonicalHeaderSet,
}

/// Run dependency resolution, default omission and header serialization
pub fn normalize(config: &ExtractionRequestConfig) -> Result<Normalized, ExtractionError> {
    let resolved = resolve(config);
    let settings = canonicalize(&resolved);
    let headers = serialize(&settings)?;

    tracing::debug!(
        settings = settings.len(),
        headers = ?headers.names().collect::<Vec<_>>(),
        "normalized extraction options"
    );

    Ok(Normalized { settings, headers })
}

impl ExtractionRequestConfig {
    /// Canonical (non-default, dependency-resolved) settings
    pub fn canonical(&self) -> CanonicalSettings {
        canonicalize(&resolve(self))
    }

    /// Header set for this configuration
    pub fn to_headers(&self) -> Result<CanonicalHeaderSet, ExtractionError> {
        normalize(self).map(|n| n.headers)
    }

    /// Pair the header set with the document to send
    pub fn prepare(&self, document: Document) -> Result<PreparedRequest, ExtractionError> {
        Ok(PreparedRequest::new(self.to_headers()?, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{HeaderValue, RotateAngle};
    use crate::domain::validation::validate_timeout;

    #[test]
    fn test_all_defaults() {
        let headers = ExtractionRequestConfig::default().to_headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Accept"), Some(&HeaderValue::from("text/plain")));
        assert_eq!(headers.get("SkipOCR"), Some(&HeaderValue::Bool(true)));
    }

    #[test]
    fn test_ocr_without_plain_text() {
        let config = ExtractionRequestConfig {
            with_ocr: true,
            as_plain_text: false,
            ..Default::default()
        };
        let headers = config.to_headers().unwrap();
        assert_eq!(headers.to_wire_pairs(), vec![("with_ocr", "true".to_string())]);
    }

    #[test]
    fn test_reference_scenario() {
        let config = ExtractionRequestConfig {
            with_ocr: true,
            with_bounding_boxes: true,
            rotate_angle: RotateAngle::Deg90,
            timeout: Some(validate_timeout(30).unwrap()),
            ..Default::default()
        };
        let normalized = normalize(&config).unwrap();
        assert_eq!(
            normalized.headers.to_wire_pairs(),
            vec![
                ("Accept", "text/plain".to_string()),
                ("with_ocr", "true".to_string()),
                ("timeout", "30".to_string()),
                ("with_bounding_boxes", "true".to_string()),
                ("rotate_angle", "90".to_string()),
            ]
        );
        assert!(!normalized.headers.contains("SkipOCR"));
        assert_eq!(normalized.settings.len(), 4);
    }

    #[test]
    fn test_prepare_keeps_document() {
        let prepared = ExtractionRequestConfig::default()
            .prepare(Document::from(b"%PDF-1.7".to_vec()))
            .unwrap();
        assert_eq!(prepared.document().len(), 8);
        assert!(prepared.headers().contains("SkipOCR"));
    }
}
