//! Short, collision-resistant identifiers: a random `UUIDv4` written in base-62.

use rand::{RngCore, rngs::ThreadRng};
use uuid::{Builder, Uuid};

/// Digits, then uppercase `A-Z`, then lowercase `a-z`.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest possible encoding of a 128-bit value.
pub const MAX_SHORT_ID_LENGTH: usize = 22;

/// Encode `value` in base-62, most significant digit first.
///
/// Zero encodes to the empty string.
#[must_use]
pub fn encode_base62(mut value: u128) -> String {
    let mut digits = Vec::with_capacity(MAX_SHORT_ID_LENGTH);
    while value > 0 {
        // value % 62 < 62, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

/// Generates short identifiers from an owned random source.
///
/// Uniqueness is statistical only (122 random bits per id). Use
/// [`ShortIdGenerator::with_rng`] with a seeded generator for reproducible output.
#[derive(Debug)]
pub struct ShortIdGenerator<R = ThreadRng> {
    rng: R,
}

impl ShortIdGenerator<ThreadRng> {
    /// Generator backed by the calling thread's generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ShortIdGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> ShortIdGenerator<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Next identifier; panics only if the underlying source does.
    pub fn generate(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        encode_uuid(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Next identifier, surfacing a failing random source as an error.
    ///
    /// # Errors
    /// Returns the source's error when it cannot produce 16 random bytes.
    pub fn try_generate(&mut self) -> Result<String, rand::Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(encode_uuid(Builder::from_random_bytes(bytes).into_uuid()))
    }
}

/// One identifier from the calling thread's generator.
#[must_use]
pub fn generate_short_unique_string() -> String {
    ShortIdGenerator::new().generate()
}

// The UUID bytes are read as one unsigned big-endian magnitude. The version
// nibble is always 4, so the value is never zero and the result never empty.
fn encode_uuid(uuid: Uuid) -> String {
    encode_base62(uuid.as_u128())
}
