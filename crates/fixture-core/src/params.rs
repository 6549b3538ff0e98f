//! Parameter mappings: field name to literal value or value supplier.

use crate::types::FieldType;
use crate::values::{FieldKind, FieldValue};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::sync::Arc;

/// Zero-argument function producing a value of a declared type.
///
/// The return type is captured when the supplier is created, so it can be
/// checked against a field without calling the function.
#[derive(Clone)]
pub struct Supplier {
    returns: FieldType,
    call: Arc<dyn Fn() -> FieldValue + Send + Sync>,
}

impl Supplier {
    /// Wrap a typed closure.
    pub fn new<T, F>(f: F) -> Self
    where
        T: FieldKind,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            returns: T::field_type(),
            call: Arc::new(move || -> FieldValue { f().into() }),
        }
    }

    /// Wrap an untyped closure that promises to return values of `returns`.
    pub fn from_fn<F>(returns: FieldType, f: F) -> Self
    where
        F: Fn() -> FieldValue + Send + Sync + 'static,
    {
        Self {
            returns,
            call: Arc::new(f),
        }
    }

    /// Declared return type.
    pub fn returns(&self) -> &FieldType {
        &self.returns
    }

    /// Invoke the function.
    pub fn call(&self) -> FieldValue {
        (self.call)()
    }
}

impl fmt::Debug for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier")
            .field("returns", &self.returns)
            .finish_non_exhaustive()
    }
}

/// Raw parameter value: a literal, or a supplier invoked at resolution time.
#[derive(Debug, Clone)]
pub enum Param {
    /// Literal value
    Value(FieldValue),

    /// Value-producing function
    Supplier(Supplier),
}

impl Param {
    /// Create a literal parameter.
    pub fn value(value: impl Into<FieldValue>) -> Self {
        Self::Value(value.into())
    }

    /// Create a supplier parameter from a typed closure.
    pub fn supplier<T, F>(f: F) -> Self
    where
        T: FieldKind,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Supplier(Supplier::new(f))
    }

    /// Check whether this parameter can be stored into a field of type `target`.
    ///
    /// Literals are checked by value; suppliers by their declared return type.
    pub fn is_assignable_to(&self, target: &FieldType) -> bool {
        match self {
            Self::Value(value) => target.accepts(value),
            Self::Supplier(supplier) => target.is_assignable_from(supplier.returns()),
        }
    }

    /// Produce the concrete value, invoking a supplier afresh on every call.
    pub fn resolve(&self) -> FieldValue {
        match self {
            Self::Value(value) => value.clone(),
            Self::Supplier(supplier) => supplier.call(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Supplier(supplier) => write!(f, "fn() -> {}", supplier.returns()),
        }
    }
}

impl From<FieldValue> for Param {
    fn from(value: FieldValue) -> Self {
        Self::Value(value)
    }
}

impl From<Supplier> for Param {
    fn from(supplier: Supplier) -> Self {
        Self::Supplier(supplier)
    }
}

/// Mapping from field name to [`Param`].
///
/// Entries are kept in key order, which is also the order in which they are
/// validated and applied. Parameters must not depend on one another.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: BTreeMap<String, Param>,
}

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal value (builder style).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entries.insert(field.into(), Param::value(value));
        self
    }

    /// Add a supplier (builder style).
    pub fn with_fn<T, F>(mut self, field: impl Into<String>, f: F) -> Self
    where
        T: FieldKind,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.entries.insert(field.into(), Param::supplier(f));
        self
    }

    /// Insert a parameter, returning the one it replaced.
    pub fn insert(&mut self, field: impl Into<String>, param: impl Into<Param>) -> Option<Param> {
        self.entries.insert(field.into(), param.into())
    }

    /// Get the parameter for a field.
    pub fn get(&self, field: &str) -> Option<&Param> {
        self.entries.get(field)
    }

    /// Check if a field has a parameter.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in application order.
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterate over entries in application order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Param> {
        self.entries.iter()
    }

    /// Overlay `overrides` on top of `self`: overriding keys win, the rest of
    /// `self` is kept.
    pub fn merge(mut self, overrides: Params) -> Params {
        self.entries.extend(overrides.entries);
        self
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Param);
    type IntoIter = btree_map::Iter<'a, String, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Param)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Param)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_merge_override_wins_and_defaults_kept() {
        let defaults = Params::new().with("name", "anon").with("balance", 0_i64);
        let overrides = Params::new().with("balance", 100_i64);

        let effective = defaults.merge(overrides);

        assert_eq!(effective.len(), 2);
        assert_eq!(
            effective.get("name").map(Param::resolve),
            Some(FieldValue::Text("anon".to_string()))
        );
        assert_eq!(
            effective.get("balance").map(Param::resolve),
            Some(FieldValue::Int64(100))
        );
    }

    #[test]
    fn test_supplier_is_invoked_on_every_resolve() {
        let counter = Arc::new(AtomicI64::new(0));
        let c = counter.clone();
        let param = Param::supplier(move || c.fetch_add(1, Ordering::SeqCst) + 1);

        assert_eq!(param.resolve(), FieldValue::Int64(1));
        assert_eq!(param.resolve(), FieldValue::Int64(2));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_supplier_type_checked_without_invocation() {
        let counter = Arc::new(AtomicI64::new(0));
        let c = counter.clone();
        let param = Param::supplier(move || c.fetch_add(1, Ordering::SeqCst));

        assert!(param.is_assignable_to(&FieldType::Int64));
        assert!(param.is_assignable_to(&FieldType::optional(FieldType::Int64)));
        assert!(!param.is_assignable_to(&FieldType::Text));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_literal_assignability() {
        assert!(Param::value("x").is_assignable_to(&FieldType::Text));
        assert!(!Param::value(1_i32).is_assignable_to(&FieldType::Int64));
    }

    #[test]
    fn test_display() {
        assert_eq!(Param::value(3_i64).to_string(), "3");
        assert_eq!(
            Param::supplier(|| "x".to_string()).to_string(),
            "fn() -> text"
        );
    }

    #[test]
    fn test_field_names_are_ordered() {
        let params = Params::new().with("b", 1_i32).with("a", 2_i32);
        assert_eq!(params.field_names(), vec!["a", "b"]);
    }
}
