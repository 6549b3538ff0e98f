//! Error types for building fixtures.

use fixture_generator::GeneratorError;

/// Error type for registration and build operations.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The record has no settable field with this name
    #[error("invalid field `{0}`")]
    InvalidField(String),

    /// The value (or supplier) cannot be assigned to the field
    #[error("value `{value}` for field `{field}` is invalid")]
    InvalidValue { field: String, value: String },

    /// Schema or YAML parameters could not be turned into params
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
