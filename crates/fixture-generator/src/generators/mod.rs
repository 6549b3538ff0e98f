//! Individual value generators for different data types.
//!
//! This module turns a [`GeneratorConfig`] into a [`Param`]: `static` and
//! `null` become literals, every other generator becomes a seeded supplier
//! that advances its own index on each invocation.

pub mod array;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod timestamp;
pub mod uuid;

use crate::generator::GeneratorError;
use fixture_core::{FieldType, FieldValue, GeneratorConfig, Param, Supplier};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use static_value::{coerce, coerce_type, yaml_to_field_value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generate a value based on the generator configuration.
///
/// `target` is the declared type of the receiving field; it steers the
/// conversion of pool and static values.
pub fn generate_value<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    index: u64,
    target: &FieldType,
) -> FieldValue {
    match config {
        GeneratorConfig::UuidV4 => self::uuid::generate_uuid_v4(rng),

        GeneratorConfig::Sequential { start } => numeric::generate_sequential(*start, index),

        GeneratorConfig::Pattern { pattern } => pattern::generate_pattern(pattern, rng, index),

        GeneratorConfig::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),

        GeneratorConfig::FloatRange { min, max } => numeric::generate_float_range(rng, *min, *max),

        GeneratorConfig::TimestampRange { start, end } => {
            timestamp::generate_timestamp_range(rng, start, end)
        }

        GeneratorConfig::TimestampNow => timestamp::generate_timestamp_now(),

        GeneratorConfig::WeightedBool { true_weight } => {
            FieldValue::Bool(rng.gen_bool(true_weight.clamp(0.0, 1.0)))
        }

        GeneratorConfig::OneOf { values } => {
            if values.is_empty() {
                FieldValue::Null
            } else {
                let idx = rng.gen_range(0..values.len());
                yaml_to_field_value(&values[idx], Some(target))
            }
        }

        GeneratorConfig::SampleArray {
            pool,
            min_length,
            max_length,
        } => {
            let element_type = match target.non_null() {
                FieldType::Array { element_type } => element_type.as_ref(),
                _ => &FieldType::Text,
            };
            array::generate_sample_array(rng, pool, *min_length, *max_length, element_type)
        }

        GeneratorConfig::Static { value } => yaml_to_field_value(value, Some(target)),

        GeneratorConfig::Null => FieldValue::Null,
    }
}

/// Type of the values a supplier built from `config` produces for `target`.
///
/// Returns `None` for the literal configs (`static`, `null`).
pub fn output_type(config: &GeneratorConfig, target: &FieldType) -> Option<FieldType> {
    let natural = match config {
        GeneratorConfig::UuidV4 => FieldType::Uuid,
        GeneratorConfig::Sequential { .. } | GeneratorConfig::IntRange { .. } => FieldType::Int64,
        GeneratorConfig::Pattern { .. } => FieldType::Text,
        GeneratorConfig::FloatRange { .. } => FieldType::Float64,
        GeneratorConfig::TimestampRange { .. } | GeneratorConfig::TimestampNow => {
            FieldType::DateTime
        }
        GeneratorConfig::WeightedBool { .. } => FieldType::Bool,
        // Pool values are converted to the target type up front.
        GeneratorConfig::OneOf { .. } => target.clone(),
        GeneratorConfig::SampleArray { .. } => match target.non_null() {
            array @ FieldType::Array { .. } => array.clone(),
            _ => FieldType::array(FieldType::Text),
        },
        GeneratorConfig::Static { .. } | GeneratorConfig::Null => return None,
    };
    Some(coerce_type(natural, target))
}

/// Mutable state shared by all invocations of one supplier.
struct SupplierState {
    rng: Mutex<StdRng>,
    index: AtomicU64,
}

/// Build the parameter for `field` (declared as `target`) from its generator.
///
/// Configs are checked eagerly: a pool entry that cannot be stored in the
/// field, a non-finite float range, a NaN weight or an oversized `{rand:N}`
/// placeholder is reported here rather than at build time.
pub fn build_param(
    field: &str,
    config: &GeneratorConfig,
    target: &FieldType,
    seed: u64,
) -> Result<Param, GeneratorError> {
    check_config(field, config, target)?;

    let Some(returns) = output_type(config, target) else {
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(Param::Value(generate_value(config, &mut rng, 0, target)));
    };

    let state = Arc::new(SupplierState {
        rng: Mutex::new(StdRng::seed_from_u64(seed)),
        index: AtomicU64::new(0),
    });
    let config = config.clone();
    let target = target.clone();

    Ok(Param::Supplier(Supplier::from_fn(returns, move || {
        let index = state.index.fetch_add(1, Ordering::Relaxed);
        let mut rng = state.rng.lock();
        coerce(generate_value(&config, &mut *rng, index, &target), &target)
    })))
}

fn check_config(
    field: &str,
    config: &GeneratorConfig,
    target: &FieldType,
) -> Result<(), GeneratorError> {
    match config {
        GeneratorConfig::FloatRange { min, max } if !(max - min).is_finite() => {
            Err(GeneratorError::InvalidRange {
                field: field.to_string(),
            })
        }
        GeneratorConfig::WeightedBool { true_weight } if true_weight.is_nan() => {
            Err(GeneratorError::InvalidRange {
                field: field.to_string(),
            })
        }
        GeneratorConfig::Pattern { pattern } => {
            let oversized = pattern::rand_digit_counts(pattern)
                .any(|digits| digits > pattern::MAX_RAND_DIGITS);
            if oversized {
                Err(GeneratorError::InvalidPattern {
                    field: field.to_string(),
                    pattern: pattern.clone(),
                })
            } else {
                Ok(())
            }
        }
        _ => check_pool(field, config, target),
    }
}

fn check_pool(
    field: &str,
    config: &GeneratorConfig,
    target: &FieldType,
) -> Result<(), GeneratorError> {
    let fits = match config {
        GeneratorConfig::OneOf { values } => {
            !values.is_empty()
                && values
                    .iter()
                    .all(|value| target.accepts(&yaml_to_field_value(value, Some(target))))
        }
        GeneratorConfig::SampleArray { pool, .. } => match target.non_null() {
            FieldType::Array { element_type } => pool.iter().all(|item| {
                element_type.accepts(&static_value::string_to_field_value(
                    item,
                    Some(element_type),
                ))
            }),
            _ => false,
        },
        _ => true,
    };

    if fits {
        Ok(())
    } else {
        Err(GeneratorError::IncompatiblePool {
            field: field.to_string(),
            expected: target.clone(),
        })
    }
}
