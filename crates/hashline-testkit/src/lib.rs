//! # Hashline Testkit
//!
//! Shared testing utilities: a demo payload type, chain-shaped record
//! sequences with fixed timestamps, corruption helpers, and proptest
//! generators.
//!
//! Nothing here is used at runtime; the crate exists so integration
//! tests across the workspace agree on fixtures.

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    corrupt_payload, corrupt_timestamp, demo_record, refresh_digest, stamped_sequence, DemoPayload,
};
