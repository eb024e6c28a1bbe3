//! Per-setting domain validation
//!
//! Rules look at one value at a time and never at other settings.

use super::catalog::ValueKind;
use crate::contract::{OptionKey, OptionValue, RotateAngle, Timeout, ValidationError};
use serde_json::Value;
use std::num::NonZeroU64;

/// Validate a timeout in seconds
pub fn validate_timeout(seconds: i64) -> Result<Timeout, ValidationError> {
    u64::try_from(seconds)
        .ok()
        .and_then(NonZeroU64::new)
        .map(Timeout::from_validated)
        .ok_or_else(|| {
            ValidationError::new(
                OptionKey::Timeout,
                format!("timeout must be positive, got {}", seconds),
            )
        })
}

/// Validate a rotation angle in degrees
pub fn validate_rotate_angle(degrees: i64) -> Result<RotateAngle, ValidationError> {
    match degrees {
        0 => Ok(RotateAngle::Deg0),
        90 => Ok(RotateAngle::Deg90),
        180 => Ok(RotateAngle::Deg180),
        270 => Ok(RotateAngle::Deg270),
        other => Err(ValidationError::new(
            OptionKey::RotateAngle,
            format!("rotate_angle must be 0, 90, 180, or 270, got {}", other),
        )),
    }
}

/// Validate an untyped value (JSON or YAML input) for one setting
///
/// `null` is accepted only for `timeout`, where it means "no timeout".
pub fn validate_value(key: OptionKey, raw: &Value) -> Result<OptionValue, ValidationError> {
    match key.kind() {
        ValueKind::Flag => raw
            .as_bool()
            .map(OptionValue::Flag)
            .ok_or_else(|| wrong_type(key, raw)),
        ValueKind::Timeout => match raw {
            Value::Null => Ok(OptionValue::Timeout(None)),
            Value::Number(_) => {
                let seconds = whole_number(key, raw)?;
                validate_timeout(seconds).map(|t| OptionValue::Timeout(Some(t)))
            }
            _ => Err(wrong_type(key, raw)),
        },
        ValueKind::Rotation => match raw {
            Value::Number(_) => {
                let degrees = whole_number(key, raw)?;
                validate_rotate_angle(degrees).map(OptionValue::Rotation)
            }
            _ => Err(wrong_type(key, raw)),
        },
    }
}

impl TryFrom<i64> for Timeout {
    type Error = ValidationError;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        validate_timeout(seconds)
    }
}

impl TryFrom<i64> for RotateAngle {
    type Error = ValidationError;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        validate_rotate_angle(degrees)
    }
}

fn whole_number(key: OptionKey, raw: &Value) -> Result<i64, ValidationError> {
    if let Some(n) = raw.as_i64() {
        return Ok(n);
    }
    if raw.as_u64().is_some() {
        return Err(ValidationError::new(
            key,
            format!("{} is out of range, got {}", key.name(), raw),
        ));
    }
    Err(ValidationError::new(
        key,
        format!("{} must be a whole number, got {}", key.name(), raw),
    ))
}

fn wrong_type(key: OptionKey, raw: &Value) -> ValidationError {
    ValidationError::new(
        key,
        format!(
            "wrong type: expected {}, got {}",
            key.kind().describe(),
            json_type_name(raw)
        ),
    )
}

fn json_type_name(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
