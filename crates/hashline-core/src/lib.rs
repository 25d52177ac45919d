//! # Hashline Core
//!
//! Pure primitives for Hashline: records, digests, the payload codec,
//! and validation.
//!
//! This crate contains no I/O, no locking, no clocks. It is pure
//! computation over the hash-chain data structures.
//!
//! ## Key Types
//!
//! - [`Record`] - one link in the chain
//! - [`Digest`] - 32-byte Blake3 content digest
//! - [`ChainFault`] - a validation failure tied to a chain position
//!
//! ## Canonical encoding
//!
//! A record's digest covers a deterministic CBOR encoding of its
//! non-digest fields. See [`canonical`].

pub mod canonical;
pub mod error;
pub mod payload;
pub mod record;
pub mod types;
pub mod validation;

pub use canonical::digest_bytes;
pub use error::{ChainFault, PayloadError, ValidationError};
pub use payload::ANCHOR_SENTINEL;
pub use record::Record;
pub use types::Digest;
pub use validation::{validate_records, verify_record};
