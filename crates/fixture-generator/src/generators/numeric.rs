//! Numeric value generators.

use fixture_core::FieldValue;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> FieldValue {
    if min >= max {
        return FieldValue::Int64(min);
    }
    FieldValue::Int64(rng.gen_range(min..=max))
}

/// Generate a random float in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> FieldValue {
    if min >= max {
        return FieldValue::Float64(min);
    }
    FieldValue::Float64(rng.gen_range(min..=max))
}

/// Generate the `index`-th value of a sequence starting at `start`.
pub fn generate_sequential(start: i64, index: u64) -> FieldValue {
    FieldValue::Int64(start.wrapping_add(index as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            if let FieldValue::Int64(v) = value {
                assert!((10..=20).contains(&v));
            } else {
                panic!("Expected Int64 value");
            }
        }
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_float_range(&mut rng, 0.0, 100.0);
            if let FieldValue::Float64(v) = value {
                assert!((0.0..=100.0).contains(&v));
            } else {
                panic!("Expected Float64 value");
            }
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_int_range(&mut rng, 5, 5), FieldValue::Int64(5));
        assert_eq!(generate_int_range(&mut rng, 9, 1), FieldValue::Int64(9));
        assert_eq!(
            generate_float_range(&mut rng, 2.5, 2.5),
            FieldValue::Float64(2.5)
        );
    }

    #[test]
    fn test_generate_sequential() {
        assert_eq!(generate_sequential(100, 0), FieldValue::Int64(100));
        assert_eq!(generate_sequential(100, 7), FieldValue::Int64(107));
    }
}
