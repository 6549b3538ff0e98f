//! Record introspection.
//!
//! A [`Record`] exposes its named fields with their declared types and lets a
//! caller assign a [`FieldValue`] into a field by name. The [`record!`] macro
//! declares a struct and derives the implementation from its field list.
//!
//! [`record!`]: crate::record!

use crate::types::FieldType;
use crate::values::FieldValue;

/// Error type for field access on a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// No field with this name
    #[error("Unknown field '{field}' on record '{record}'")]
    Unknown { record: String, field: String },

    /// Field exists but is not public
    #[error("Field '{field}' on record '{record}' is not settable")]
    NotSettable { record: String, field: String },

    /// Value does not fit the field's declared type
    #[error("Field '{field}' expects {expected}")]
    TypeMismatch { field: String, expected: FieldType },
}

/// Metadata for a single record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name as written in the struct
    pub name: &'static str,

    /// Declared field type
    pub field_type: FieldType,

    /// Whether the field may be assigned by name (declared `pub`)
    pub settable: bool,
}

impl FieldSpec {
    /// Create a new field spec.
    pub fn new(name: &'static str, field_type: FieldType, settable: bool) -> Self {
        Self {
            name,
            field_type,
            settable,
        }
    }
}

/// A structured value whose fields can be looked up and assigned by name.
///
/// `Default` provides the zero value used when fresh instances are allocated.
///
/// # Example
///
/// ```rust
/// use fixture_core::{FieldType, FieldValue, Record};
///
/// fixture_core::record! {
///     #[derive(Debug, Default)]
///     pub struct Account {
///         pub name: String,
///         pub balance: i64,
///     }
/// }
///
/// let mut account = Account::default();
/// account.set_field("balance", FieldValue::Int64(100)).unwrap();
/// assert_eq!(account.balance, 100);
/// assert_eq!(Account::NAME, "Account");
/// assert_eq!(Account::field("name").unwrap().field_type, FieldType::Text);
/// ```
pub trait Record: Default + 'static {
    /// Record name, used in diagnostics and to look records up in a schema.
    const NAME: &'static str;

    /// All fields, in declaration order.
    fn fields() -> Vec<FieldSpec>;

    /// Look up a field by exact name.
    fn field(name: &str) -> Option<FieldSpec> {
        Self::fields().into_iter().find(|spec| spec.name == name)
    }

    /// Assign a value into the named field.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError>;

    /// Read the current value of the named field.
    fn get_field(&self, name: &str) -> Option<FieldValue>;
}

/// Whether a stringified visibility qualifier makes a field public.
#[doc(hidden)]
pub fn is_public(visibility: &str) -> bool {
    !visibility.is_empty()
}

/// Declare a struct and implement [`Record`] for it.
///
/// Fields declared with any `pub` qualifier are settable; private fields are
/// listed by [`Record::fields`] but rejected by [`Record::set_field`]. Every
/// field type must implement [`FieldKind`](crate::FieldKind).
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field : $fty ),*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::FieldSpec> {
                ::std::vec![
                    $(
                        $crate::FieldSpec::new(
                            stringify!($field),
                            <$fty as $crate::FieldKind>::field_type(),
                            $crate::record::is_public(stringify!($fvis)),
                        )
                    ),*
                ]
            }

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                name: &str,
                value: $crate::FieldValue,
            ) -> ::std::result::Result<(), $crate::FieldError> {
                match name {
                    $(
                        stringify!($field) => {
                            if !$crate::record::is_public(stringify!($fvis)) {
                                return Err($crate::FieldError::NotSettable {
                                    record: stringify!($name).to_string(),
                                    field: name.to_string(),
                                });
                            }
                            match <$fty as $crate::FieldKind>::from_value(value) {
                                Some(v) => {
                                    self.$field = v;
                                    Ok(())
                                }
                                None => Err($crate::FieldError::TypeMismatch {
                                    field: name.to_string(),
                                    expected: <$fty as $crate::FieldKind>::field_type(),
                                }),
                            }
                        }
                    )*
                    _ => Err($crate::FieldError::Unknown {
                        record: stringify!($name).to_string(),
                        field: name.to_string(),
                    }),
                }
            }

            fn get_field(&self, name: &str) -> ::std::option::Option<$crate::FieldValue> {
                match name {
                    $(
                        stringify!($field) => Some(
                            <$fty as ::std::clone::Clone>::clone(&self.$field).into()
                        ),
                    )*
                    _ => None,
                }
            }
        }
    };
}
