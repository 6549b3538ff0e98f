//! Schema-driven parameter generation.

use crate::generators::build_param;
use crate::generators::static_value::yaml_to_field_value;
use fixture_core::{FieldType, FixtureSchema, Param, Params, Record, RecordDefinition};
use serde_yaml::Value as YamlValue;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Record not found in schema
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] fixture_core::SchemaError),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Parameters were not given as a mapping
    #[error("Parameters must be a string-keyed mapping, found {found}")]
    NotAMapping { found: &'static str },

    /// A mapping key was not a string
    #[error("Parameter keys must be strings, found {found}")]
    NonStringKey { found: &'static str },

    /// A generator names a field the record does not have
    #[error("Generator for unknown field '{field}' on record '{record}'")]
    UnknownField { record: String, field: String },

    /// A pool-based generator holds values the field cannot store
    #[error("Pool values for field '{field}' do not fit type {expected}")]
    IncompatiblePool { field: String, expected: FieldType },

    /// A float range or weight is not a usable finite number
    #[error("Range for field '{field}' must be finite")]
    InvalidRange { field: String },

    /// A pattern asks for more random digits than allowed
    #[error("Pattern '{pattern}' for field '{field}' has a {{rand:N}} placeholder over the digit limit")]
    InvalidPattern { field: String, pattern: String },
}

/// Produces default [`Params`] for records from a [`FixtureSchema`].
///
/// Every generator field gets its own deterministic seed derived from the
/// schema seed and the field's position, so two generators built from the
/// same schema and seed yield the same sequence of values.
pub struct ParamGenerator {
    /// Schema defining the records and field generators
    schema: FixtureSchema,
    /// Base seed for all suppliers
    seed: u64,
}

impl ParamGenerator {
    /// Create a generator using the schema's seed (or 0).
    pub fn new(schema: FixtureSchema) -> Self {
        let seed = schema.seed.unwrap_or(0);
        Self { schema, seed }
    }

    /// Load the schema from a YAML file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, GeneratorError> {
        Ok(Self::new(FixtureSchema::from_file(path)?))
    }

    /// Override the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &FixtureSchema {
        &self.schema
    }

    /// Compute the seed for the generator at `position` within a record.
    fn field_seed(&self, position: usize) -> u64 {
        self.seed
            .wrapping_add((position as u64).wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Build the default parameters for record type `R`, looked up by `R::NAME`.
    pub fn params_for<R: Record>(&self) -> Result<Params, GeneratorError> {
        let record = self
            .schema
            .get_record(R::NAME)
            .ok_or_else(|| GeneratorError::RecordNotFound(R::NAME.to_string()))?;
        self.params_for_definition::<R>(record)
    }

    fn params_for_definition<R: Record>(
        &self,
        record: &RecordDefinition,
    ) -> Result<Params, GeneratorError> {
        let mut params = match &record.defaults {
            Some(defaults) => params_from_value::<R>(defaults)?,
            None => Params::new(),
        };

        for (position, field) in record.fields.iter().enumerate() {
            let spec = R::field(&field.name).ok_or_else(|| GeneratorError::UnknownField {
                record: R::NAME.to_string(),
                field: field.name.clone(),
            })?;
            let param = build_param(
                &field.name,
                &field.generator,
                &spec.field_type,
                self.field_seed(position),
            )?;
            params.insert(field.name.clone(), param);
        }

        Ok(params)
    }
}

/// Parse a YAML mapping of literal parameters for record type `R`.
///
/// Values are converted using the declared field types as hints. Unknown
/// field names are kept so that validation can report them.
pub fn overrides_from_yaml<R: Record>(yaml: &str) -> Result<Params, GeneratorError> {
    let value: YamlValue = serde_yaml::from_str(yaml)?;
    params_from_value::<R>(&value)
}

/// Convert a YAML value that must be a string-keyed mapping into [`Params`].
pub fn params_from_value<R: Record>(value: &YamlValue) -> Result<Params, GeneratorError> {
    let mapping = match value {
        YamlValue::Mapping(mapping) => mapping,
        // An empty document means no parameters.
        YamlValue::Null => return Ok(Params::new()),
        other => {
            return Err(GeneratorError::NotAMapping {
                found: yaml_kind(other),
            })
        }
    };

    mapping
        .iter()
        .map(|(key, value)| -> Result<(String, Param), GeneratorError> {
            let field = key.as_str().ok_or(GeneratorError::NonStringKey {
                found: yaml_kind(key),
            })?;
            let target = R::field(field).map(|spec| spec.field_type);
            let value = yaml_to_field_value(value, target.as_ref());
            Ok((field.to_string(), Param::Value(value)))
        })
        .collect()
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "bool",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}
