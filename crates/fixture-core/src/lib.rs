//! Core types for the fixture-factory test data builder.
//!
//! This crate provides the introspection layer the builder depends on:
//!
//! - [`FieldType`] - Declared type of a record field, with assignability rules
//! - [`FieldValue`] - Runtime value assigned into a field
//! - [`FieldKind`] - Maps Rust field types to `FieldType` and back
//! - [`Record`] / [`record!`] - Named-field lookup and assignment
//! - [`Param`] / [`Params`] - Literal-or-supplier parameter mappings
//! - [`FixtureSchema`] - Default parameters loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator  (YAML generator configs -> Params)
//!    │
//!    └─── fixture-factory    (registry, validation, builder API)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldValue, Params, Record};
//!
//! fixture_core::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Account {
//!         pub name: String,
//!         pub balance: i64,
//!     }
//! }
//!
//! let params = Params::new().with("name", "anon").with("balance", 0_i64);
//! let mut account = Account::default();
//! for (field, param) in &params {
//!     account.set_field(field, param.resolve()).unwrap();
//! }
//! assert_eq!(account.name, "anon");
//! ```

pub mod params;
pub mod record;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use params::{Param, Params, Supplier};
pub use record::{FieldError, FieldSpec, Record};
pub use schema::{
    FixtureSchema, GeneratorConfig, GeneratorFieldDefinition, RecordDefinition, SchemaError,
};
pub use types::FieldType;
pub use values::{FieldKind, FieldValue};
