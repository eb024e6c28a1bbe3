//! Header serializer: static mapping from settings to wire headers
//!
//! | setting             | value   | header                | wire value   |
//! |---------------------|---------|-----------------------|--------------|
//! | as_plain_text       | true    | `Accept`              | `text/plain` |
//! | as_plain_text       | false   | (none, HTML output)   |              |
//! | with_ocr            | false   | `SkipOCR`             | `true`       |
//! | with_ocr            | true    | `with_ocr`            | `true`       |
//! | timeout             | present | `timeout`             | seconds      |
//! | with_bounding_boxes | true    | `with_bounding_boxes` | `true`       |
//! | inline_ocr          | true    | `inline_ocr`          | `true`       |
//! | ocr_with_text       | true    | `ocr_with_text`       | `true`       |
//! | rotate_angle        | != 0    | `rotate_angle`        | degrees      |
//! | detect_tables       | true    | `detect_tables`       | `true`       |
//!
//! `as_plain_text` and `with_ocr` are encoded even at their default value,
//! since the service falls back to HTML output with OCR when the header is
//! absent. Every other setting at its default emits nothing.

use crate::contract::{
    CanonicalHeaderSet, CanonicalSettings, ExtractionError, HeaderValue, OptionKey, OptionValue,
    RotateAngle,
};
use indexmap::IndexMap;

/// Values of a setting a row applies to
#[derive(Debug, Clone, Copy)]
enum ValueMatch {
    Flag(bool),
    /// `timeout` present or `rotate_angle` non-zero
    Present,
}

impl ValueMatch {
    fn matches(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (Self::Flag(expected), OptionValue::Flag(actual)) => expected == actual,
            (Self::Present, OptionValue::Timeout(timeout)) => timeout.is_some(),
            (Self::Present, OptionValue::Rotation(angle)) => *angle != RotateAngle::Deg0,
            _ => false,
        }
    }
}

/// Wire value written for a matching row
#[derive(Debug, Clone, Copy)]
enum WireValue {
    Text(&'static str),
    True,
    /// The setting's own number (seconds or degrees)
    Verbatim,
}

impl WireValue {
    fn render(&self, value: &OptionValue) -> Option<HeaderValue> {
        match (self, value) {
            (Self::Text(text), _) => Some(HeaderValue::Text((*text).to_string())),
            (Self::True, _) => Some(HeaderValue::Bool(true)),
            (Self::Verbatim, OptionValue::Timeout(Some(timeout))) => {
                Some(HeaderValue::Int(timeout.seconds()))
            }
            (Self::Verbatim, OptionValue::Rotation(angle)) => {
                Some(HeaderValue::from(angle.degrees()))
            }
            (Self::Verbatim, OptionValue::Flag(flag)) => Some(HeaderValue::Bool(*flag)),
            (Self::Verbatim, OptionValue::Timeout(None)) => None,
        }
    }
}

#[derive(Debug)]
struct HeaderRule {
    setting: OptionKey,
    when: ValueMatch,
    /// `None` marks a value that is deliberately not sent
    header: Option<&'static str>,
    value: WireValue,
}

static HEADER_TABLE: &[HeaderRule] = &[
    HeaderRule {
        setting: OptionKey::AsPlainText,
        when: ValueMatch::Flag(true),
        header: Some("Accept"),
        value: WireValue::Text("text/plain"),
    },
    HeaderRule {
        setting: OptionKey::AsPlainText,
        when: ValueMatch::Flag(false),
        header: None,
        value: WireValue::Verbatim,
    },
    HeaderRule {
        setting: OptionKey::WithOcr,
        when: ValueMatch::Flag(false),
        header: Some("SkipOCR"),
        value: WireValue::True,
    },
    HeaderRule {
        setting: OptionKey::WithOcr,
        when: ValueMatch::Flag(true),
        header: Some("with_ocr"),
        value: WireValue::True,
    },
    HeaderRule {
        setting: OptionKey::Timeout,
        when: ValueMatch::Present,
        header: Some("timeout"),
        value: WireValue::Verbatim,
    },
    HeaderRule {
        setting: OptionKey::WithBoundingBoxes,
        when: ValueMatch::Flag(true),
        header: Some("with_bounding_boxes"),
        value: WireValue::True,
    },
    HeaderRule {
        setting: OptionKey::InlineOcr,
        when: ValueMatch::Flag(true),
        header: Some("inline_ocr"),
        value: WireValue::True,
    },
    HeaderRule {
        setting: OptionKey::OcrWithText,
        when: ValueMatch::Flag(true),
        header: Some("ocr_with_text"),
        value: WireValue::True,
    },
    HeaderRule {
        setting: OptionKey::RotateAngle,
        when: ValueMatch::Present,
        header: Some("rotate_angle"),
        value: WireValue::Verbatim,
    },
    HeaderRule {
        setting: OptionKey::DetectTables,
        when: ValueMatch::Flag(true),
        header: Some("detect_tables"),
        value: WireValue::True,
    },
];

fn lookup(key: OptionKey, value: &OptionValue) -> Option<&'static HeaderRule> {
    HEADER_TABLE
        .iter()
        .find(|rule| rule.setting == key && rule.when.matches(value))
}

/// Map canonical settings to the header set sent to the service
///
/// A canonical entry without a table row is an internal error.
pub fn serialize(canonical: &CanonicalSettings) -> Result<CanonicalHeaderSet, ExtractionError> {
    let mut headers = IndexMap::new();

    for key in OptionKey::ALL {
        let value = canonical.effective(key);
        let Some(rule) = lookup(key, &value) else {
            if canonical.contains(key) {
                return Err(ExtractionError::internal(format!(
                    "no header mapping for {}={}",
                    key, value
                )));
            }
            continue;
        };
        let Some(name) = rule.header else {
            continue;
        };
        let rendered = rule.value.render(&value).ok_or_else(|| {
            ExtractionError::internal(format!("cannot render {}={} as header {}", key, value, name))
        })?;
        headers.insert(name, rendered);
    }

    Ok(CanonicalHeaderSet::from_headers(headers))
}
