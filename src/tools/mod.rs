//! Pure identifier and text helpers.
//!
//! None of these functions perform I/O or keep state between calls; the only
//! shared resource is whatever random source a caller hands in.

pub mod document;
pub mod email;
pub mod random;
pub mod short_id;
pub mod shuffle;
pub mod slug;

pub use self::document::{
    DocumentKind, only_numbers, validate_cnpj, validate_cpf, validate_cpf_or_cnpj,
};
pub use self::email::is_valid_email;
pub use self::random::SharedRng;
pub use self::short_id::{ShortIdGenerator, encode_base62, generate_short_unique_string};
pub use self::shuffle::{ShuffleExt, shuffle};
pub use self::slug::generate_slug;
