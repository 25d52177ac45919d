//! Error types for the Chain.

use hashline_core::{ChainFault, PayloadError};
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Pre-append validation found corrupted records. The chain is left
    /// unchanged and will not grow until the caller intervenes; every
    /// fault found in the pass is carried, not just the first.
    #[error("chain is not valid: {} fault(s)", faults.len())]
    Invalid {
        /// All validation failures, in chain order.
        faults: Vec<ChainFault>,
    },

    /// Payload codec failure.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
