//! YAML to `FieldValue` conversion.
//!
//! Conversions take an optional target field type as a hint, so that a YAML
//! integer lands in an `i32` field as `Int32` and a YAML string lands in a
//! `Uuid` or `DateTime` field as the parsed value. Values that cannot be
//! converted keep their natural form and are rejected later by validation.

use super::timestamp::parse_timestamp;
use fixture_core::{FieldType, FieldValue};
use serde_yaml::Value as YamlValue;
use uuid::Uuid;

/// Convert a YAML value to a `FieldValue`, guided by the target type if known.
pub fn yaml_to_field_value(yaml: &YamlValue, target: Option<&FieldType>) -> FieldValue {
    let target = target.map(FieldType::non_null);

    if let Some(FieldType::Json) = target {
        if let Ok(json) = serde_json::to_value(yaml) {
            return FieldValue::Json(json);
        }
    }

    match yaml {
        YamlValue::Null => FieldValue::Null,
        YamlValue::Bool(b) => FieldValue::Bool(*b),
        YamlValue::Number(n) => match target {
            Some(FieldType::Int32) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                Some(i) => FieldValue::Int32(i),
                None => number_to_field_value(n),
            },
            Some(FieldType::Float64) => match n.as_f64() {
                Some(f) => FieldValue::Float64(f),
                None => number_to_field_value(n),
            },
            _ => number_to_field_value(n),
        },
        YamlValue::String(s) => string_to_field_value(s, target),
        YamlValue::Sequence(items) => {
            let element_type = match target {
                Some(FieldType::Array { element_type }) => Some(element_type.as_ref()),
                _ => None,
            };
            FieldValue::Array(
                items
                    .iter()
                    .map(|item| yaml_to_field_value(item, element_type))
                    .collect(),
            )
        }
        YamlValue::Mapping(_) => match serde_json::to_value(yaml) {
            Ok(json) => FieldValue::Json(json),
            Err(_) => FieldValue::Null,
        },
        YamlValue::Tagged(tagged) => yaml_to_field_value(&tagged.value, target),
    }
}

fn number_to_field_value(n: &serde_yaml::Number) -> FieldValue {
    if let Some(i) = n.as_i64() {
        FieldValue::Int64(i)
    } else if let Some(f) = n.as_f64() {
        FieldValue::Float64(f)
    } else {
        FieldValue::Text(n.to_string())
    }
}

/// Convert a string to the value kind the target type expects, if it parses.
pub fn string_to_field_value(s: &str, target: Option<&FieldType>) -> FieldValue {
    match target.map(FieldType::non_null) {
        Some(FieldType::Uuid) => match Uuid::parse_str(s) {
            Ok(u) => FieldValue::Uuid(u),
            Err(_) => FieldValue::Text(s.to_string()),
        },
        Some(FieldType::DateTime) => match parse_timestamp(s) {
            Some(dt) => FieldValue::DateTime(dt),
            None => FieldValue::Text(s.to_string()),
        },
        Some(FieldType::Int32) => match s.parse::<i32>() {
            Ok(i) => FieldValue::Int32(i),
            Err(_) => FieldValue::Text(s.to_string()),
        },
        Some(FieldType::Int64) => match s.parse::<i64>() {
            Ok(i) => FieldValue::Int64(i),
            Err(_) => FieldValue::Text(s.to_string()),
        },
        Some(FieldType::Float64) => match s.parse::<f64>() {
            Ok(f) => FieldValue::Float64(f),
            Err(_) => FieldValue::Text(s.to_string()),
        },
        Some(FieldType::Bool) => match s.to_lowercase().as_str() {
            "true" | "1" | "yes" => FieldValue::Bool(true),
            "false" | "0" | "no" => FieldValue::Bool(false),
            _ => FieldValue::Text(s.to_string()),
        },
        _ => FieldValue::Text(s.to_string()),
    }
}

/// Narrow a generated value to the representation the target type expects.
///
/// Only lossless narrowing is applied: `Int64` to `Int32` when in range and
/// `Uuid` to `Text`.
pub fn coerce(value: FieldValue, target: &FieldType) -> FieldValue {
    match (target.non_null(), value) {
        (FieldType::Int32, FieldValue::Int64(i)) => match i32::try_from(i) {
            Ok(i) => FieldValue::Int32(i),
            Err(_) => FieldValue::Int64(i),
        },
        (FieldType::Text, FieldValue::Uuid(u)) => FieldValue::Text(u.to_string()),
        (FieldType::Array { element_type }, FieldValue::Array(items)) => FieldValue::Array(
            items
                .into_iter()
                .map(|item| coerce(item, element_type))
                .collect(),
        ),
        (_, value) => value,
    }
}

/// Type-level counterpart of [`coerce`].
pub fn coerce_type(natural: FieldType, target: &FieldType) -> FieldType {
    match (target.non_null(), natural) {
        (FieldType::Int32, FieldType::Int64) => FieldType::Int32,
        (FieldType::Text, FieldType::Uuid) => FieldType::Text,
        (FieldType::Array { element_type: target_element }, FieldType::Array { element_type }) => {
            FieldType::array(coerce_type(*element_type, target_element))
        }
        (_, natural) => natural,
    }
}
