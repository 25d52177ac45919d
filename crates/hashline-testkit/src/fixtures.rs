//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use hashline_core::{Digest, Record};
use serde::{Deserialize, Serialize};

/// The demo payload shape used across tests, mirroring the kind of
/// structured application data callers store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoPayload {
    pub data: String,
}

impl DemoPayload {
    /// Create a demo payload with the given data string.
    pub fn new(data: &str) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

/// Create a detached record holding a demo payload.
pub fn demo_record(data: &str) -> Record {
    Record::create(&DemoPayload::new(data)).expect("demo payload encodes")
}

/// Build a valid, fully-stamped record sequence: the anchor plus
/// `appended` demo records, linked and digested the way the chain's
/// append path does it, with fixed timestamps for reproducibility.
pub fn stamped_sequence(appended: usize) -> Vec<Record> {
    let mut records = Vec::with_capacity(appended + 1);
    let mut prev = Digest::ZERO;
    for index in 0..=appended {
        let mut record = if index == 0 {
            Record::anchor()
        } else {
            demo_record(&format!("Block #{}", index))
        };
        record.position = index as u64;
        record.timestamp_ms = 1_736_870_400_000 + index as i64;
        record.prev_digest = prev;
        let digest = record.compute_digest();
        record.digest = Some(digest);
        prev = digest;
        records.push(record);
    }
    records
}

/// Flip one byte of the record's payload, leaving the stored digest
/// stale.
pub fn corrupt_payload(record: &mut Record) {
    let mut bytes = record.payload.to_vec();
    match bytes.first_mut() {
        Some(byte) => *byte ^= 0x01,
        None => bytes.push(0x00),
    }
    record.payload = bytes.into();
}

/// Shift the record's timestamp, leaving the stored digest stale.
pub fn corrupt_timestamp(record: &mut Record) {
    record.timestamp_ms += 1;
}

/// Recompute the record's digest over its current (possibly tampered)
/// fields, making the local digest check pass again. Used to exercise
/// the linkage check on the successor.
pub fn refresh_digest(record: &mut Record) {
    record.digest = Some(record.compute_digest());
}
