//! API handlers for the NTools endpoints.
//!
//! Each handler wraps one pure function from [`crate::tools`], logs the
//! call the same way the rest of the service does, and maps the result to
//! the wire format existing clients expect: JSON booleans for validators,
//! plain text for generated strings.

pub mod document;
pub mod health;
pub mod mail;
pub mod string;

use crate::tools::{SharedRng, ShortIdGenerator};

/// State shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Source for `/String/generateShortUniqueString`; clones share one stream.
    rng: SharedRng,
}

impl AppState {
    #[must_use]
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }

    /// A generator drawing from the shared source.
    #[must_use]
    pub fn short_ids(&self) -> ShortIdGenerator<SharedRng> {
        ShortIdGenerator::with_rng(self.rng.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SharedRng::from_entropy())
    }
}
