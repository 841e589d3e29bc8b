//! # NTools (identifier & text canonicalization)
//!
//! `ntools` bundles the small, pure helpers the rest of the platform leans on
//! whenever a human-entered string has to become something a machine can trust.
//!
//! ## Tools
//!
//! - **Documents:** Brazilian `CPF` (11 digits) and `CNPJ` (14 digits) are validated
//!   through their two weighted check digits. Formatting characters (`.`, `-`, `/`,
//!   spaces) are ignored, repeated-digit sequences are rejected.
//! - **Slugs:** arbitrary text is folded to lowercase `[a-z0-9-]`, accents are stripped
//!   through Unicode decomposition, and the result is idempotent.
//! - **Short identifiers:** a random 128-bit (`UUIDv4`) value encoded in base-62.
//! - **Email format:** a permissive `local@domain.tld` shape check, not an RFC 5322 parser.
//! - **Shuffling:** in-place Fisher–Yates over any slice, driven by an explicit random source.
//!
//! Every tool is total: malformed input maps to `false` or `""`, never to a panic.
//!
//! ## HTTP surface
//!
//! The `api` module exposes the tools as `GET` endpoints that keep the historical
//! controller paths (`/Document/...`, `/String/...`, `/Mail/...`).

pub mod api;
pub mod cli;
pub mod tools;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
