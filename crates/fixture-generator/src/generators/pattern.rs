//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - per-supplier invocation index
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number, at most [`MAX_RAND_DIGITS`] digits

use super::uuid::random_uuid_v4;
use fixture_core::FieldValue;
use rand::Rng;

/// Largest digit count a `{rand:N}` placeholder may ask for.
pub const MAX_RAND_DIGITS: usize = 64;

/// Digit counts of the well-formed `{rand:N}` placeholders in `pattern`.
pub fn rand_digit_counts(pattern: &str) -> impl Iterator<Item = usize> + '_ {
    pattern
        .split("{rand:")
        .skip(1)
        .filter_map(|rest| rest.split_once('}'))
        .filter_map(|(digits, _)| digits.parse::<usize>().ok())
}

/// Generate a string based on a pattern with placeholders.
///
/// `{rand:N}` placeholders are truncated to [`MAX_RAND_DIGITS`] digits.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> FieldValue {
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &random_uuid_v4(rng).to_string(), 1);
    }

    // Replace {rand:N} patterns
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("{rand:") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}').map(|end| start + end) else {
            break;
        };
        match result[start + 6..end].parse::<usize>() {
            Ok(digits) => {
                let random_num = generate_random_digits(rng, digits.min(MAX_RAND_DIGITS));
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
                search_from = start + random_num.len();
            }
            // Leave malformed placeholders in place
            Err(_) => search_from = end + 1,
        }
    }

    FieldValue::Text(result)
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|i| {
            // First digit is 1-9 to avoid leading zeros
            let digit: u8 = if i == 0 {
                rng.gen_range(1..10)
            } else {
                rng.gen_range(0..10)
            };
            char::from(b'0' + digit)
        })
        .collect()
}
