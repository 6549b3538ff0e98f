//! Field types for fixture records.
//!
//! This module defines `FieldType`, the declared type of a record field, and
//! the assignability rules used to decide whether a literal value or a
//! supplier's return type may be stored into a field.

use crate::values::FieldValue;
use std::fmt;

/// Declared type of a record field.
///
/// Every Rust type that can appear in a fixture record maps to exactly one
/// `FieldType` through the [`FieldKind`](crate::FieldKind) trait:
///
/// | Rust type | `FieldType` |
/// |---|---|
/// | `bool` | `Bool` |
/// | `i32` | `Int32` |
/// | `i64` | `Int64` |
/// | `f64` | `Float64` |
/// | `String` | `Text` |
/// | `uuid::Uuid` | `Uuid` |
/// | `chrono::DateTime<Utc>` | `DateTime` |
/// | `serde_json::Value` | `Json` |
/// | `Vec<T>` | `Array { element_type }` |
/// | `Option<T>` | `Optional { inner }` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Boolean value
    Bool,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// UTF-8 text
    Text,

    /// UUID (128-bit)
    Uuid,

    /// Timestamp with UTC timezone
    DateTime,

    /// Arbitrary JSON document
    Json,

    /// Homogeneous list
    Array {
        /// Element type
        element_type: Box<FieldType>,
    },

    /// Nullable wrapper around another type
    Optional {
        /// Wrapped type
        inner: Box<FieldType>,
    },
}

impl FieldType {
    /// Create an array type.
    pub fn array(element_type: FieldType) -> Self {
        Self::Array {
            element_type: Box::new(element_type),
        }
    }

    /// Create an optional type.
    pub fn optional(inner: FieldType) -> Self {
        Self::Optional {
            inner: Box::new(inner),
        }
    }

    /// Strip one `Optional` layer, if any.
    pub fn non_null(&self) -> &FieldType {
        match self {
            Self::Optional { inner } => inner,
            other => other,
        }
    }

    /// Check whether a literal value can be stored into a field of this type.
    ///
    /// There is no numeric widening: an `Int32` value is not accepted by an
    /// `Int64` field.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Optional { .. }, FieldValue::Null) => true,
            (Self::Optional { inner }, value) => inner.accepts(value),
            (Self::Array { element_type }, FieldValue::Array(items)) => {
                items.iter().all(|item| element_type.accepts(item))
            }
            (Self::Bool, FieldValue::Bool(_))
            | (Self::Int32, FieldValue::Int32(_))
            | (Self::Int64, FieldValue::Int64(_))
            | (Self::Float64, FieldValue::Float64(_))
            | (Self::Text, FieldValue::Text(_))
            | (Self::Uuid, FieldValue::Uuid(_))
            | (Self::DateTime, FieldValue::DateTime(_))
            | (Self::Json, FieldValue::Json(_)) => true,
            _ => false,
        }
    }

    /// Check whether a value of type `source` can be stored into a field of
    /// this type.
    ///
    /// Used for suppliers, whose return type is known without invoking them.
    pub fn is_assignable_from(&self, source: &FieldType) -> bool {
        if self == source {
            return true;
        }
        match (self, source) {
            (Self::Optional { inner }, source) => inner.is_assignable_from(source.non_null()),
            (Self::Array { element_type }, Self::Array { element_type: source }) => {
                element_type.is_assignable_from(source)
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::Float64 => f.write_str("float64"),
            Self::Text => f.write_str("text"),
            Self::Uuid => f.write_str("uuid"),
            Self::DateTime => f.write_str("datetime"),
            Self::Json => f.write_str("json"),
            Self::Array { element_type } => write!(f, "array<{element_type}>"),
            Self::Optional { inner } => write!(f, "optional<{inner}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accepts_same_kind_only() {
        assert!(FieldType::Int64.accepts(&FieldValue::Int64(1)));
        assert!(!FieldType::Int64.accepts(&FieldValue::Int32(1)));
        assert!(!FieldType::Text.accepts(&FieldValue::Int64(1)));
        assert!(!FieldType::Bool.accepts(&FieldValue::Null));
    }

    #[test]
    fn test_optional_accepts_null_and_inner() {
        let ty = FieldType::optional(FieldType::Text);
        assert!(ty.accepts(&FieldValue::Null));
        assert!(ty.accepts(&FieldValue::Text("x".to_string())));
        assert!(!ty.accepts(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_array_checks_every_element() {
        let ty = FieldType::array(FieldType::Int32);
        assert!(ty.accepts(&FieldValue::Array(vec![])));
        assert!(ty.accepts(&FieldValue::Array(vec![
            FieldValue::Int32(1),
            FieldValue::Int32(2)
        ])));
        assert!(!ty.accepts(&FieldValue::Array(vec![
            FieldValue::Int32(1),
            FieldValue::Text("2".to_string())
        ])));
    }

    #[test]
    fn test_type_assignability() {
        assert!(FieldType::Int64.is_assignable_from(&FieldType::Int64));
        assert!(!FieldType::Int64.is_assignable_from(&FieldType::Int32));

        let optional = FieldType::optional(FieldType::Uuid);
        assert!(optional.is_assignable_from(&FieldType::Uuid));
        assert!(optional.is_assignable_from(&FieldType::optional(FieldType::Uuid)));
        assert!(!FieldType::Uuid.is_assignable_from(&optional));
    }

    #[test]
    fn test_array_assignability_matches_accepts() {
        let ty = FieldType::array(FieldType::optional(FieldType::Text));
        let text = FieldValue::Array(vec![FieldValue::Text("a".to_string())]);

        assert!(ty.accepts(&text));
        assert!(ty.is_assignable_from(&FieldType::array(FieldType::Text)));
        assert!(ty.is_assignable_from(&ty));
        assert!(!FieldType::array(FieldType::Text).is_assignable_from(&ty));
        assert!(!ty.is_assignable_from(&FieldType::array(FieldType::Int64)));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Int64.to_string(), "int64");
        assert_eq!(
            FieldType::optional(FieldType::array(FieldType::Text)).to_string(),
            "optional<array<text>>"
        );
    }
}
