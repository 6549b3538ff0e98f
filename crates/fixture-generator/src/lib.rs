//! Parameter generators for the fixture-factory test data builder.
//!
//! This crate turns the generator configs of a YAML [`FixtureSchema`] into
//! [`Params`]: literal defaults stay literals, generators become seeded
//! suppliers that produce a fresh value every time a record is built.
//!
//! # Architecture
//!
//! ```text
//! FixtureSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  ParamGenerator  │
//! │                  │
//! │  - schema        │
//! │  - seed          │
//! └────────┬─────────┘
//!          │  one seeded supplier per generator field
//!          ▼
//!      Params { field -> Value | Supplier }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldValue, FixtureSchema};
//! use fixture_generator::ParamGenerator;
//!
//! fixture_core::record! {
//!     #[derive(Debug, Default)]
//!     pub struct User {
//!         pub number: i64,
//!         pub email: String,
//!     }
//! }
//!
//! let schema = FixtureSchema::from_yaml(r#"
//! seed: 42
//! records:
//!   - name: User
//!     fields:
//!       - name: number
//!         generator:
//!           type: sequential
//!           start: 100
//!       - name: email
//!         generator:
//!           type: pattern
//!           pattern: "user_{index}@example.com"
//! "#).unwrap();
//!
//! let params = ParamGenerator::new(schema).params_for::<User>().unwrap();
//! let number = params.get("number").unwrap();
//! assert_eq!(number.resolve(), FieldValue::Int64(100));
//! assert_eq!(number.resolve(), FieldValue::Int64(101));
//! ```
//!
//! # Generators
//!
//! - `uuid_v4` - Random UUID v4
//! - `sequential` - Sequential integers
//! - `pattern` - Pattern strings with placeholders (`{index}`, `{uuid}`, `{rand:N}`)
//! - `int_range` - Random integers in a range
//! - `float_range` - Random floats in a range
//! - `timestamp_range` - Random timestamps in a date range
//! - `timestamp_now` - Current time at build
//! - `weighted_bool` - Boolean with configurable true probability
//! - `one_of` - Random selection from a list
//! - `sample_array` - Array of random samples from a pool
//! - `static` - Static value
//! - `null` - Null value
//!
//! [`FixtureSchema`]: fixture_core::FixtureSchema
//! [`Params`]: fixture_core::Params

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{overrides_from_yaml, params_from_value, GeneratorError, ParamGenerator};
