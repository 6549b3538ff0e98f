//! Default parameters registered per record type.

use crate::error::BuildError;
use crate::validate::validate;
use fixture_core::{Params, Record};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// Registered defaults for one record type.
#[derive(Debug, Clone)]
struct Entry {
    name: &'static str,
    defaults: Params,
}

/// Mapping from record type to its default parameters.
///
/// Each type has at most one entry; registering again replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `defaults` against `R` and store them, returning the mapping
    /// they replaced.
    ///
    /// On validation failure the registry is left unchanged.
    pub fn register<R: Record>(&mut self, defaults: Params) -> Result<Option<Params>, BuildError> {
        validate::<R>(&defaults)?;

        debug!(
            "Registering {} default(s) for {}: {:?}",
            defaults.len(),
            R::NAME,
            defaults.field_names()
        );

        let previous = self.entries.insert(
            TypeId::of::<R>(),
            Entry {
                name: R::NAME,
                defaults,
            },
        );
        Ok(previous.map(|entry| entry.defaults))
    }

    /// Defaults registered for `R`, or an empty mapping.
    pub fn defaults_for<R: Record>(&self) -> Params {
        self.entries
            .get(&TypeId::of::<R>())
            .map(|entry| entry.defaults.clone())
            .unwrap_or_default()
    }

    pub fn is_registered<R: Record>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all registered record types, sorted.
    pub fn record_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }
}
