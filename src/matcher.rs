//! Field lookup by parameter name.

use fixture_core::{FieldSpec, Record};

/// Find the settable field of `R` named exactly `name`.
///
/// Matching is case-sensitive. Fields that exist but are not public are
/// reported as absent.
pub fn match_field<R: Record>(name: &str) -> Option<FieldSpec> {
    R::fields()
        .into_iter()
        .find(|spec| spec.name == name)
        .filter(|spec| spec.settable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::FieldType;

    fixture_core::record! {
        #[derive(Debug, Default)]
        pub struct Account {
            pub name: String,
            pub balance: i64,
            secret: String,
        }
    }

    #[test]
    fn test_exact_match() {
        let spec = match_field::<Account>("balance").unwrap();
        assert_eq!(spec.name, "balance");
        assert_eq!(spec.field_type, FieldType::Int64);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(match_field::<Account>("Balance").is_none());
        assert!(match_field::<Account>("NAME").is_none());
    }

    #[test]
    fn test_missing_and_private_fields() {
        assert!(match_field::<Account>("missing").is_none());
        assert!(match_field::<Account>("").is_none());
        assert!(match_field::<Account>("secret").is_none());
    }
}
