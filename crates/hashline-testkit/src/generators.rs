//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashline_core::{Digest, Record};

use crate::fixtures::DemoPayload;

/// Generate a random Digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate a chain position.
pub fn position() -> impl Strategy<Value = u64> {
    0u64..=1 << 20
}

/// Generate a demo payload with printable-ASCII data.
pub fn demo_payload() -> impl Strategy<Value = DemoPayload> {
    "[ -~]{0,64}".prop_map(|data| DemoPayload { data })
}

/// Generate a detached record (no digest, no stamps).
pub fn detached_record() -> impl Strategy<Value = Record> {
    demo_payload().prop_map(|payload| Record::create(&payload).expect("demo payload encodes"))
}

/// Generate a fully-stamped record with a consistent digest.
pub fn stamped_record() -> impl Strategy<Value = Record> {
    (detached_record(), position(), timestamp(), digest()).prop_map(
        |(mut record, position, timestamp_ms, prev)| {
            record.position = position;
            record.timestamp_ms = timestamp_ms;
            record.prev_digest = prev;
            record.digest = Some(record.compute_digest());
            record
        },
    )
}
