//! Fixture Factory
//!
//! A test data builder: register default field values per record type, then
//! build instances with optional per-call overrides.
//!
//! # Features
//!
//! - Per-type defaults: literals or suppliers re-invoked for every instance
//! - Overrides: per-call parameters that win over registered defaults
//! - Validation: unknown, private, and mistyped fields are rejected before
//!   anything is written
//! - Schema-driven defaults: YAML generator configs (sequential, uuid_v4,
//!   pattern, ranges, ...) via `fixture_generator`
//!
//! # Crates
//!
//! - `fixture_core` - Field types, values, the `Record` trait and `record!`
//!   macro, parameter mappings, and the YAML schema
//! - `fixture_generator` - Seeded suppliers built from schema generators
//!
//! # Example
//!
//! ```rust
//! use fixture_core::Params;
//! use fixture_factory::Factory;
//! use std::sync::atomic::{AtomicI64, Ordering};
//!
//! fixture_core::record! {
//!     #[derive(Debug, Default)]
//!     pub struct User {
//!         pub id: i64,
//!         pub name: String,
//!     }
//! }
//!
//! let next_id = AtomicI64::new(1);
//! let mut factory = Factory::new();
//! factory
//!     .register::<User>(
//!         Params::new()
//!             .with("name", "anon")
//!             .with_fn("id", move || next_id.fetch_add(1, Ordering::SeqCst)),
//!     )
//!     .unwrap();
//!
//! let users: Vec<User> = factory.build_many(3, None).unwrap();
//! assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod execute;
pub mod matcher;
pub mod registry;
pub mod validate;

// Re-export main types
pub use builder::Factory;
pub use error::BuildError;
pub use execute::execute;
pub use matcher::match_field;
pub use registry::Registry;
pub use validate::validate;

pub use fixture_core::{FieldType, FieldValue, Param, Params, Record, Supplier};
