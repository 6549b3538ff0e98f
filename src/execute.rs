//! Parameter application onto a record instance.

use crate::error::BuildError;
use crate::matcher::match_field;
use fixture_core::{FieldValue, Params, Record};
use tracing::trace;

/// Resolve every parameter and assign it to the matching field of `target`.
///
/// Suppliers are invoked once per call. All values are resolved and checked
/// against their fields before any assignment, so on error `target` is left
/// exactly as it was.
pub fn execute<R: Record>(target: &mut R, params: &Params) -> Result<(), BuildError> {
    let mut resolved: Vec<(&str, FieldValue)> = Vec::with_capacity(params.len());

    for (field, param) in params {
        let spec = match_field::<R>(field).ok_or_else(|| BuildError::InvalidField(field.clone()))?;
        let value = param.resolve();

        if !spec.field_type.accepts(&value) {
            return Err(BuildError::InvalidValue {
                field: field.clone(),
                value: value.to_string(),
            });
        }
        resolved.push((field.as_str(), value));
    }

    for (field, value) in resolved {
        trace!("Setting {}.{} = {}", R::NAME, field, value);
        target
            .set_field(field, value)
            .map_err(|_| BuildError::InvalidField(field.to_string()))?;
    }

    Ok(())
}
