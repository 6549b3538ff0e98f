//! Fixture schema definitions.
//!
//! A fixture schema declares default parameters per record, loaded from YAML:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! records:
//!   - name: Account
//!     defaults:
//!       name: anon
//!     fields:
//!       - name: balance
//!         generator:
//!           type: int_range
//!           min: 0
//!           max: 100
//! ```
//!
//! `defaults` holds plain literals; `fields` attaches a generator to a field.
//! When both name the same field, the generator wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Record not found in schema
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

// ============================================================================
// Generator Types
// ============================================================================

/// Generator configuration for a field.
///
/// Every variant except `Static` and `Null` becomes a value supplier that is
/// invoked once per built record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate UUIDs (v4)
    UuidV4,

    /// Generate sequential integers
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Generate values using a pattern with placeholders
    Pattern {
        /// Pattern string (supports {index}, {uuid}, {rand:N})
        pattern: String,
    },

    /// Generate random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random floats in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Generate timestamps in a range
    TimestampRange {
        /// Start timestamp (ISO 8601)
        start: String,
        /// End timestamp (ISO 8601)
        end: String,
    },

    /// Generate the current timestamp at build time
    ///
    /// Not deterministic: each build produces a different value.
    TimestampNow,

    /// Generate weighted boolean values
    WeightedBool {
        /// Weight for true value (0.0 to 1.0)
        true_weight: f64,
    },

    /// Generate random selection from a pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// Generate arrays by sampling from a pool
    SampleArray {
        /// Pool of values to sample from
        pool: Vec<String>,
        /// Minimum array length
        #[serde(default)]
        min_length: usize,
        /// Maximum array length
        max_length: usize,
    },

    /// Use a static value
    Static {
        /// The static value to use
        value: serde_yaml::Value,
    },

    /// Use null (for optional fields)
    Null,
}

/// Field with generator config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorFieldDefinition {
    /// Field name
    pub name: String,

    /// Generator configuration for this field
    pub generator: GeneratorConfig,
}

/// Default parameters for one record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDefinition {
    /// Record name (matches `Record::NAME`)
    pub name: String,

    /// Literal defaults; must be a string-keyed mapping when present
    #[serde(default)]
    pub defaults: Option<serde_yaml::Value>,

    /// Generator-backed defaults
    #[serde(default)]
    pub fields: Vec<GeneratorFieldDefinition>,
}

impl RecordDefinition {
    /// Get a generator field by name.
    pub fn get_field(&self, name: &str) -> Option<&GeneratorFieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all generator field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

fn default_version() -> u32 {
    1
}

/// Full fixture schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Random seed for generators (optional, can be overridden)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Record definitions
    #[serde(default)]
    pub records: Vec<RecordDefinition>,

    /// Cached record lookup (not serialized)
    #[serde(skip)]
    record_map: HashMap<String, usize>,
}

impl FixtureSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.build_record_map();
        Ok(schema)
    }

    /// Build the internal record lookup map.
    fn build_record_map(&mut self) {
        self.record_map = self
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.name.clone(), idx))
            .collect();
    }

    /// Get a record definition by name.
    pub fn get_record(&self, name: &str) -> Option<&RecordDefinition> {
        self.record_map
            .get(name)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Get a record definition by name, failing if it is absent.
    pub fn require_record(&self, name: &str) -> Result<&RecordDefinition, SchemaError> {
        self.get_record(name)
            .ok_or_else(|| SchemaError::RecordNotFound(name.to_string()))
    }

    /// Get all record names in the schema.
    pub fn record_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
version: 1
seed: 42
records:
  - name: Account
    defaults:
      name: anon
      balance: 0
    fields:
      - name: id
        generator:
          type: uuid_v4
      - name: number
        generator:
          type: sequential
          start: 1000
      - name: email
        generator:
          type: pattern
          pattern: "user_{index}@example.com"
  - name: Tag
    fields:
      - name: label
        generator:
          type: one_of
          values: [red, green]
"#;

    #[test]
    fn test_parse_schema() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.record_names(), vec!["Account", "Tag"]);

        let account = schema.get_record("Account").unwrap();
        assert_eq!(account.field_names(), vec!["id", "number", "email"]);
        assert!(account.defaults.as_ref().unwrap().is_mapping());
        assert!(matches!(
            account.get_field("number").unwrap().generator,
            GeneratorConfig::Sequential { start: 1000 }
        ));

        let tag = schema.get_record("Tag").unwrap();
        assert!(tag.defaults.is_none());
    }

    #[test]
    fn test_record_not_found() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        assert!(schema.get_record("Missing").is_none());
        assert!(matches!(
            schema.require_record("Missing"),
            Err(SchemaError::RecordNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_defaults_to_version_one() {
        let schema = FixtureSchema::from_yaml("records: []").unwrap();
        assert_eq!(schema.version, 1);
        assert!(schema.seed.is_none());
    }

    #[test]
    fn test_invalid_generator_type() {
        let yaml = r#"
records:
  - name: Account
    fields:
      - name: id
        generator:
          type: no_such_generator
"#;
        assert!(matches!(
            FixtureSchema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }
}
