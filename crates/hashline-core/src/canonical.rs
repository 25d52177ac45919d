//! Canonical CBOR encoding for the digest pre-image.
//!
//! This module follows RFC 8949 Core Deterministic Encoding:
//! - Integer map keys, emitted in sorted order
//! - Integers use the smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 milliseconds)
//!
//! The canonical encoding is critical: the same record must produce
//! identical bytes (and thus an identical digest) across platforms and
//! releases. There is no decode path; the encoding exists only as hash
//! input.

use ciborium::value::Value;

use crate::record::Record;

/// Field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR. The entries below are
/// built in key order, which is already the canonical sorted order.
mod keys {
    pub const POSITION: u64 = 0;
    pub const TIMESTAMP: u64 = 1;
    pub const PREV_DIGEST: u64 = 2;
    pub const PAYLOAD: u64 = 3;
}

/// Encode the digest-covered fields of a record: everything except the
/// digest itself.
pub fn digest_bytes(record: &Record) -> Vec<u8> {
    let entries = vec![
        (
            Value::Integer(keys::POSITION.into()),
            Value::Integer(record.position.into()),
        ),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(record.timestamp_ms.into()),
        ),
        (
            Value::Integer(keys::PREV_DIGEST.into()),
            Value::Bytes(record.prev_digest.0.to_vec()),
        ),
        (
            Value::Integer(keys::PAYLOAD.into()),
            Value::Bytes(record.payload.to_vec()),
        ),
    ];

    // Entries are pre-sorted and ciborium emits minimal-length integers
    // and definite lengths, so plain serialization is already canonical.
    let mut buf = Vec::new();
    ciborium::into_writer(&Value::Map(entries), &mut buf)
        .expect("CBOR encoding of an in-memory value cannot fail");
    buf
}
