//! YAML-driven registration and overrides.

use crate::builder::Factory;
use crate::error::BuildError;
use fixture_core::{FixtureSchema, Params, Record};
use fixture_generator::{overrides_from_yaml, ParamGenerator};
use std::path::Path;
use tracing::info;

impl Factory {
    /// Register the defaults declared for `R::NAME` in `schema`.
    ///
    /// Generator fields become seeded suppliers, so each built instance gets
    /// the next value of the sequence.
    pub fn register_from_schema<R: Record>(
        &mut self,
        schema: &FixtureSchema,
    ) -> Result<Option<Params>, BuildError> {
        let params = ParamGenerator::new(schema.clone()).params_for::<R>()?;
        self.register::<R>(params)
    }

    /// Load a schema file and hand its [`ParamGenerator`] to `register`, which
    /// registers the record types it needs through [`Factory::register_with`].
    pub fn from_schema_file<P: AsRef<Path>>(
        path: P,
        register: impl FnOnce(&mut Factory, &ParamGenerator) -> Result<(), BuildError>,
    ) -> Result<Factory, BuildError> {
        let generator = ParamGenerator::from_file(path.as_ref())?;
        info!(
            "Loaded fixture schema {} with records {:?}",
            path.as_ref().display(),
            generator.schema().record_names()
        );

        let mut factory = Factory::new();
        register(&mut factory, &generator)?;
        Ok(factory)
    }

    /// Register `R` using the defaults produced by `generator`.
    pub fn register_with<R: Record>(
        &mut self,
        generator: &ParamGenerator,
    ) -> Result<Option<Params>, BuildError> {
        let params = generator.params_for::<R>()?;
        self.register::<R>(params)
    }

    /// Build `target` using overrides given as a YAML mapping.
    pub fn build_with_yaml<'a, R: Record>(
        &self,
        target: &'a mut R,
        yaml: &str,
    ) -> Result<&'a mut R, BuildError> {
        let overrides = overrides_from_yaml::<R>(yaml)?;
        self.build(target, Some(overrides))
    }
}
