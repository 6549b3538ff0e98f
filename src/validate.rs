//! Parameter validation against a record's fields.

use crate::error::BuildError;
use crate::matcher::match_field;
use fixture_core::{Params, Record};

/// Check that every parameter names a settable field of `R` and carries a
/// value (or supplier) assignable to that field.
///
/// Entries are checked in key order and the first failure is returned.
/// Suppliers are checked by their declared return type and never invoked.
pub fn validate<R: Record>(params: &Params) -> Result<(), BuildError> {
    for (field, param) in params {
        let spec = match_field::<R>(field).ok_or_else(|| BuildError::InvalidField(field.clone()))?;

        if !param.is_assignable_to(&spec.field_type) {
            return Err(BuildError::InvalidValue {
                field: field.clone(),
                value: param.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::{FieldType, FieldValue, Supplier};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fixture_core::record! {
        #[derive(Debug, Default)]
        pub struct Account {
            pub name: String,
            pub balance: i64,
            pub nickname: Option<String>,
            secret: String,
        }
    }

    #[test]
    fn test_empty_params_are_valid() {
        assert!(validate::<Account>(&Params::new()).is_ok());
    }

    #[test]
    fn test_valid_literals_and_null_for_optional() {
        let params = Params::new()
            .with("name", "anon")
            .with("balance", 100_i64)
            .with("nickname", FieldValue::Null);
        assert!(validate::<Account>(&params).is_ok());
    }

    #[test]
    fn test_unknown_field() {
        let params = Params::new().with("missing", 1_i64);
        let err = validate::<Account>(&params).unwrap_err();
        assert!(matches!(err, BuildError::InvalidField(ref f) if f == "missing"));
        assert_eq!(err.to_string(), "invalid field `missing`");
    }

    #[test]
    fn test_private_field() {
        let params = Params::new().with("secret", "x");
        assert!(matches!(
            validate::<Account>(&params),
            Err(BuildError::InvalidField(f)) if f == "secret"
        ));
    }

    #[test]
    fn test_incompatible_literal() {
        let params = Params::new().with("balance", "lots");
        let err = validate::<Account>(&params).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidValue { ref field, ref value } if field == "balance" && value == "lots"
        ));
        assert_eq!(
            err.to_string(),
            "value `lots` for field `balance` is invalid"
        );
    }

    #[test]
    fn test_no_numeric_widening() {
        let params = Params::new().with("balance", 100_i32);
        assert!(matches!(
            validate::<Account>(&params),
            Err(BuildError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_suppliers_checked_without_invocation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let params = Params::new().with_fn("balance", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            7_i64
        });
        assert!(validate::<Account>(&params).is_ok());

        let params = Params::new().with_fn("balance", || "seven".to_string());
        let err = validate::<Account>(&params).unwrap_err();
        assert!(matches!(err, BuildError::InvalidValue { ref value, .. } if value == "fn() -> text"));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_optional_supplier_for_optional_field() {
        let mut params = Params::new();
        params.insert(
            "nickname",
            Supplier::from_fn(FieldType::Text, || FieldValue::from("nick")),
        );
        assert!(validate::<Account>(&params).is_ok());
    }

    #[test]
    fn test_first_error_in_key_order() {
        let params = Params::new().with("zeta", 1_i64).with("alpha", 1_i64);
        assert!(matches!(
            validate::<Account>(&params),
            Err(BuildError::InvalidField(f)) if f == "alpha"
        ));
    }
}
