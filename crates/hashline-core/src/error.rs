//! Error types for Hashline core.

use std::fmt;

use thiserror::Error;

use crate::types::Digest;

/// Errors from the payload codec.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The application data could not be serialized to text.
    #[error("payload serialization failed: {0}")]
    Serialize(String),

    /// The payload bytes are not a hex-wrapped text.
    #[error("payload bytes are malformed: {0}")]
    Decoding(String),

    /// The payload text does not parse as the requested data type.
    #[error("payload text does not match the requested type: {0}")]
    Deserialize(String),

    /// The record is the anchor, which carries no application data.
    /// This signals "no real data here", not corruption.
    #[error("anchor record carries no application data")]
    AnchorRecord,
}

/// Per-record validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The record's digest was never computed.
    #[error("record has no digest")]
    MissingDigest,

    /// The stored digest does not match the recomputed one.
    #[error("digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch { stored: Digest, computed: Digest },

    /// The record's position does not match its index in the chain.
    #[error("position mismatch: expected {expected}, got {got}")]
    PositionMismatch { expected: u64, got: u64 },

    /// The record's predecessor link does not match the predecessor's
    /// stored digest.
    #[error("predecessor link mismatch: expected {expected}, got {got}")]
    LinkageMismatch { expected: Digest, got: Digest },
}

/// A validation failure tied to a chain position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFault {
    /// Index of the faulty record within the chain.
    pub position: u64,
    /// What failed.
    pub error: ValidationError,
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.position, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let fault = ChainFault {
            position: 3,
            error: ValidationError::MissingDigest,
        };
        assert_eq!(format!("{}", fault), "record 3: record has no digest");
    }

    #[test]
    fn test_digest_mismatch_names_both_sides() {
        let error = ValidationError::DigestMismatch {
            stored: Digest::from_bytes([0xaa; 32]),
            computed: Digest::from_bytes([0xbb; 32]),
        };
        let text = format!("{}", error);
        assert!(text.contains("aaaaaaaaaaaaaaaa"));
        assert!(text.contains("bbbbbbbbbbbbbbbb"));
    }
}
