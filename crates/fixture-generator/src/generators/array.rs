//! Array value generators.

use super::static_value::string_to_field_value;
use fixture_core::{FieldType, FieldValue};
use rand::Rng;

/// Generate an array by sampling from a pool of values with type-aware conversion.
///
/// Pool entries are converted to `element_type` when they parse as such.
pub fn generate_sample_array<R: Rng>(
    rng: &mut R,
    pool: &[String],
    min_length: usize,
    max_length: usize,
    element_type: &FieldType,
) -> FieldValue {
    if pool.is_empty() || max_length == 0 {
        return FieldValue::Array(vec![]);
    }

    let length = rng.gen_range(min_length.min(max_length)..=max_length);

    // Randomly select `length` items from the pool (with potential duplicates)
    let items: Vec<FieldValue> = (0..length)
        .map(|_| {
            let item = &pool[rng.gen_range(0..pool.len())];
            string_to_field_value(item, Some(element_type))
        })
        .collect();

    FieldValue::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_sample_array() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["a", "b", "c"]);

        for _ in 0..10 {
            let value = generate_sample_array(&mut rng, &pool, 1, 3, &FieldType::Text);
            if let FieldValue::Array(arr) = value {
                assert!(!arr.is_empty());
                assert!(arr.len() <= 3);
                assert!(arr.iter().all(|v| matches!(v, FieldValue::Text(_))));
            } else {
                panic!("Expected Array value");
            }
        }
    }

    #[test]
    fn test_generate_sample_array_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_sample_array(&mut rng, &[], 0, 3, &FieldType::Text);
        assert_eq!(value, FieldValue::Array(vec![]));
    }

    #[test]
    fn test_generate_sample_array_typed() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["1", "2", "3"]);

        let value = generate_sample_array(&mut rng, &pool, 2, 2, &FieldType::Int32);
        if let FieldValue::Array(arr) = value {
            assert_eq!(arr.len(), 2);
            assert!(arr.iter().all(|v| matches!(v, FieldValue::Int32(_))));
        } else {
            panic!("Expected Array value");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let pool = pool(&["a", "b", "c"]);

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let value1 = generate_sample_array(&mut rng1, &pool, 1, 3, &FieldType::Text);
        let value2 = generate_sample_array(&mut rng2, &pool, 1, 3, &FieldType::Text);

        assert_eq!(value1, value2);
    }
}
