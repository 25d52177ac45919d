//! # Hashline
//!
//! An append-only sequence of records linked by cryptographic digests.
//! Each record's integrity depends on its own content and its position
//! in the sequence; tampering anywhere makes validation fail at the
//! damaged position.
//!
//! ## Overview
//!
//! - **Record**: one link in the chain - an encoded payload, positional
//!   metadata, and a Blake3 content digest.
//! - **Anchor**: the sentinel record seeded automatically at chain
//!   creation; it carries no application data.
//! - **Chain**: the ordered, growing collection. It stamps position,
//!   append time, and the predecessor link, validates the existing
//!   records, computes the digest last, and stores the record.
//!
//! A corrupted chain blocks further growth but is never repaired or
//! truncated; validation reports every fault in one pass.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashline::Chain;
//!
//! async fn example() {
//!     let chain = Chain::new().await;
//!
//!     let record = chain.append_data("Block #1").await.unwrap();
//!     assert_eq!(record.position, 1);
//!
//!     // Empty fault list = intact chain.
//!     assert!(chain.validate().await.is_empty());
//!
//!     for rendered in chain.render().await {
//!         println!("{}", rendered);
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! The pure computation layer lives in `hashline-core`, re-exported here
//! as [`core`] along with its main types.

pub mod chain;
pub mod error;

// Re-export the core crate
pub use hashline_core as core;

pub use chain::Chain;
pub use error::{ChainError, Result};

// Re-export commonly used core types
pub use hashline_core::{
    validate_records, verify_record, ChainFault, Digest, PayloadError, Record, ValidationError,
    ANCHOR_SENTINEL,
};
