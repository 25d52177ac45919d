//! Chain validation: per-record digest checks and whole-chain scans.

use crate::error::{ChainFault, ValidationError};
use crate::record::Record;
use crate::types::Digest;

/// Verify a single record's digest.
///
/// Recomputes the digest over the record's current non-digest fields and
/// compares it to the stored one. Read-only; the record is never written
/// to during verification.
pub fn verify_record(record: &Record) -> Result<(), ValidationError> {
    let stored = record.digest.ok_or(ValidationError::MissingDigest)?;
    let computed = record.compute_digest();
    if stored != computed {
        return Err(ValidationError::DigestMismatch { stored, computed });
    }
    Ok(())
}

/// Validate an ordered sequence of records.
///
/// Every record is checked and failures are collected without
/// short-circuiting, so a single pass reports the full scope of damage.
/// Three checks run per record:
///
/// - the digest check via [`verify_record`] (authoritative),
/// - position == index,
/// - predecessor linkage against the prior record's stored digest
///   ([`Digest::ZERO`] for the record at index 0).
///
/// The position and linkage checks only add faults on top of the digest
/// check; they never replace or suppress it.
pub fn validate_records(records: &[Record]) -> Vec<ChainFault> {
    let mut faults = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let position = index as u64;

        if let Err(error) = verify_record(record) {
            faults.push(ChainFault { position, error });
        }

        if record.position != position {
            faults.push(ChainFault {
                position,
                error: ValidationError::PositionMismatch {
                    expected: position,
                    got: record.position,
                },
            });
        }

        let expected_prev = match index {
            0 => Digest::ZERO,
            _ => records[index - 1].digest.unwrap_or(Digest::ZERO),
        };
        if record.prev_digest != expected_prev {
            faults.push(ChainFault {
                position,
                error: ValidationError::LinkageMismatch {
                    expected: expected_prev,
                    got: record.prev_digest,
                },
            });
        }
    }

    faults
}
