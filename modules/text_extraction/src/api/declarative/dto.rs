//! Declarative configuration document (JSON or YAML)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Extraction options as written in a configuration document
///
/// Values stay untyped until mapping so that a wrong JSON type is reported
/// as a validation error naming the setting, not as a parse error. An explicit
/// `null` is kept as `Some(Value::Null)`; only a missing key is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfigDto {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub as_plain_text: Option<Value>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub with_ocr: Option<Value>,

    /// Seconds; `null` or absent means no timeout
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub with_bounding_boxes: Option<Value>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub inline_ocr: Option<Value>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub ocr_with_text: Option<Value>,

    /// 0, 90, 180 or 270
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rotate_angle: Option<Value>,

    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub detect_tables: Option<Value>,
}

/// Wrap every present value, `null` included
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ExtractionConfigDto {
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
