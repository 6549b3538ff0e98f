//! The public build API.

use crate::error::BuildError;
use crate::execute::execute;
use crate::registry::Registry;
use crate::validate::validate;
use fixture_core::{Params, Record};
use tracing::{debug, warn};

/// Builds record instances from registered defaults and per-call overrides.
///
/// # Example
///
/// ```rust
/// use fixture_core::Params;
/// use fixture_factory::Factory;
///
/// fixture_core::record! {
///     #[derive(Debug, Default)]
///     pub struct Account {
///         pub name: String,
///         pub balance: i64,
///     }
/// }
///
/// let mut factory = Factory::new();
/// factory
///     .register::<Account>(Params::new().with("name", "anon").with("balance", 100_i64))
///     .unwrap();
///
/// let mut account = Account::default();
/// factory
///     .build(&mut account, Some(Params::new().with("balance", 5_i64)))
///     .unwrap();
/// assert_eq!(account.name, "anon");
/// assert_eq!(account.balance, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Factory {
    registry: Registry,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register default parameters for `R`, replacing any earlier ones.
    pub fn register<R: Record>(&mut self, defaults: Params) -> Result<Option<Params>, BuildError> {
        self.registry.register::<R>(defaults)
    }

    /// Registered defaults for `R` with `overrides` laid on top.
    pub fn effective_params<R: Record>(&self, overrides: Option<Params>) -> Params {
        let defaults = self.registry.defaults_for::<R>();
        match overrides {
            Some(overrides) => defaults.merge(overrides),
            None => defaults,
        }
    }

    /// Populate `target` with the effective parameters for `R`.
    ///
    /// Fields without a parameter keep their current values. On error
    /// `target` is not modified.
    pub fn build<'a, R: Record>(
        &self,
        target: &'a mut R,
        overrides: Option<Params>,
    ) -> Result<&'a mut R, BuildError> {
        let params = self.effective_params::<R>(overrides);
        validate::<R>(&params)?;

        debug!("Building {} with {} param(s)", R::NAME, params.len());
        execute(target, &params)?;
        Ok(target)
    }

    /// Build `n` fresh instances of `R`.
    ///
    /// Parameters are validated once; suppliers are invoked once per
    /// instance. Returns an empty vector when `n` is zero.
    pub fn build_many<R: Record>(
        &self,
        n: usize,
        overrides: Option<Params>,
    ) -> Result<Vec<R>, BuildError> {
        let params = self.effective_params::<R>(overrides);
        validate::<R>(&params)?;

        debug!("Building {} x {} with {} param(s)", n, R::NAME, params.len());
        (0..n)
            .map(|_| {
                let mut instance = R::default();
                execute(&mut instance, &params)?;
                Ok(instance)
            })
            .collect()
    }

    /// Like [`Factory::build`], but logs the error and returns `target`
    /// untouched instead of failing.
    pub fn must_build<'a, R: Record>(
        &self,
        target: &'a mut R,
        overrides: Option<Params>,
    ) -> &'a mut R {
        let params = self.effective_params::<R>(overrides);
        let result = validate::<R>(&params).and_then(|()| execute(target, &params));
        if let Err(e) = result {
            warn!("Failed to build {}: {}", R::NAME, e);
        }
        target
    }

    /// Like [`Factory::build_many`], but logs the error and returns an empty
    /// vector instead of failing.
    pub fn must_build_many<R: Record>(&self, n: usize, overrides: Option<Params>) -> Vec<R> {
        self.build_many(n, overrides).unwrap_or_else(|e| {
            warn!("Failed to build {} x {}: {}", n, R::NAME, e);
            Vec::new()
        })
    }
}
