//! UUID value generator.

use fixture_core::FieldValue;
use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> FieldValue {
    FieldValue::Uuid(random_uuid_v4(rng))
}

/// Build a v4 UUID from RNG bytes, so seeded generators stay reproducible.
pub fn random_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
