//! Value representations for fixture records.
//!
//! `FieldValue` is the type-agnostic value that flows from parameters into
//! record fields. The [`FieldKind`] trait connects concrete Rust field types
//! to their [`FieldType`] and converts values back out.

use crate::types::FieldType;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Runtime value assigned to a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value, only accepted by optional fields
    Null,

    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// Text value
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// Date/time with timezone
    DateTime(DateTime<Utc>),

    /// JSON document
    Json(serde_json::Value),

    /// List of values
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<FieldValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int32(i) => write!(f, "{i}"),
            Self::Int64(i) => write!(f, "{i}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Json(json) => write!(f, "{json}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A Rust type that can be stored in a record field.
///
/// Implementations tie the Rust type to its declared [`FieldType`] and convert
/// a [`FieldValue`] back into the concrete type. `from_value` returns `None`
/// when the value is not accepted by `field_type()`.
pub trait FieldKind: Into<FieldValue> + Clone + Sized {
    /// Declared type of fields holding `Self`.
    fn field_type() -> FieldType;

    /// Convert a value back into `Self`.
    fn from_value(value: FieldValue) -> Option<Self>;
}

macro_rules! scalar_field_kind {
    ($ty:ty, $field_type:ident, $variant:ident) => {
        impl FieldKind for $ty {
            fn field_type() -> FieldType {
                FieldType::$field_type
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

scalar_field_kind!(bool, Bool, Bool);
scalar_field_kind!(i32, Int32, Int32);
scalar_field_kind!(i64, Int64, Int64);
scalar_field_kind!(f64, Float64, Float64);
scalar_field_kind!(String, Text, Text);
scalar_field_kind!(Uuid, Uuid, Uuid);
scalar_field_kind!(DateTime<Utc>, DateTime, DateTime);
scalar_field_kind!(serde_json::Value, Json, Json);

impl<T: FieldKind> FieldKind for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::array(T::field_type())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Array(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: FieldKind> FieldKind for Option<T> {
    fn field_type() -> FieldType {
        FieldType::optional(T::field_type())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Int32(42).as_i32(), Some(42));
        assert_eq!(FieldValue::Int64(100).as_i64(), Some(100));
        assert_eq!(FieldValue::Float64(3.15).as_f64(), Some(3.15));
        assert_eq!(FieldValue::Text("test".to_string()).as_str(), Some("test"));

        // Cross-type conversions
        assert_eq!(FieldValue::Int32(42).as_i64(), Some(42));
        assert_eq!(FieldValue::Bool(true).as_i32(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(FieldValue::from("anon"), FieldValue::Text("anon".to_string()));
        assert_eq!(FieldValue::from(7_i64), FieldValue::Int64(7));
        assert_eq!(FieldValue::from(None::<i32>), FieldValue::Null);
        assert_eq!(
            FieldValue::from(vec![1_i32, 2]),
            FieldValue::Array(vec![FieldValue::Int32(1), FieldValue::Int32(2)])
        );
    }

    #[test]
    fn test_field_kind_round_trip_through_option_and_vec() {
        assert_eq!(
            <Option<String>>::field_type(),
            FieldType::optional(FieldType::Text)
        );
        assert_eq!(<Option<String>>::from_value(FieldValue::Null), Some(None));
        assert_eq!(
            <Option<String>>::from_value(FieldValue::Text("a".to_string())),
            Some(Some("a".to_string()))
        );
        assert_eq!(
            <Vec<i64>>::from_value(FieldValue::Array(vec![FieldValue::Int64(3)])),
            Some(vec![3])
        );
        assert_eq!(
            <Vec<i64>>::from_value(FieldValue::Array(vec![FieldValue::Int32(3)])),
            None
        );
    }

    #[test]
    fn test_from_value_rejects_other_kinds() {
        assert_eq!(i64::from_value(FieldValue::Int32(1)), None);
        assert_eq!(String::from_value(FieldValue::Null), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Text("anon".to_string()).to_string(), "anon");
        assert_eq!(FieldValue::Null.to_string(), "null");
        assert_eq!(
            FieldValue::Array(vec![FieldValue::Int64(1), FieldValue::Bool(false)]).to_string(),
            "[1, false]"
        );
    }
}
