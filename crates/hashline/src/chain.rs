//! The Chain: an ordered, growing collection of records.
//!
//! The chain owns its records behind a single `RwLock`. Append is the
//! only mutating operation and holds the write lock across the entire
//! stamp-validate-hash-push sequence, so a validation pass can never see
//! a half-appended record and an append can never act on a stale view.
//! Read operations share the read lock and may run concurrently with
//! each other.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use hashline_core::{validate_records, ChainFault, Digest, Record};

use crate::error::{ChainError, Result};

/// An append-only sequence of records linked by predecessor digests.
///
/// Constructed empty and immediately self-initialized with the anchor
/// record. The chain only grows; records are never reordered, truncated,
/// or rewritten.
pub struct Chain {
    records: RwLock<Vec<Record>>,
}

impl Chain {
    /// Create a chain and seed the anchor record.
    pub async fn new() -> Self {
        let chain = Self {
            records: RwLock::new(Vec::new()),
        };
        chain.initialize().await;
        chain
    }

    /// Adopt an existing record sequence as-is.
    ///
    /// Nothing is validated on adoption: [`Chain::validate`] reports on
    /// demand, and [`Chain::append`] refuses to grow a corrupted
    /// sequence.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Seed the anchor through the normal append path.
    ///
    /// Runs only against the empty chain; validation of an empty chain
    /// is vacuous, so the anchor cannot be rejected.
    async fn initialize(&self) {
        if self.height().await != -1 {
            return;
        }
        self.append(Record::anchor())
            .await
            .expect("empty chain accepts the anchor");
    }

    /// Append a record to the chain.
    ///
    /// Stamps the record's position, timestamp, and predecessor digest,
    /// validates the existing chain, computes the digest last, and
    /// stores the record. A corrupted chain blocks growth: the error
    /// carries every fault found and the chain is left unchanged.
    ///
    /// Returns the fully-populated record as stored.
    pub async fn append(&self, mut record: Record) -> Result<Record> {
        let mut records = self.records.write().await;

        record.position = records.len() as u64;
        record.timestamp_ms = now_millis();
        record.prev_digest = match records.last() {
            // A digestless tip fails validation below, so the ZERO
            // placeholder never reaches a stored record.
            Some(tip) => tip.digest.unwrap_or(Digest::ZERO),
            None => Digest::ZERO,
        };

        let faults = validate_records(&records);
        if !faults.is_empty() {
            warn!(faults = faults.len(), "append rejected: chain is invalid");
            return Err(ChainError::Invalid { faults });
        }

        record.digest = Some(record.compute_digest());

        debug!(position = record.position, "record appended");
        records.push(record.clone());
        Ok(record)
    }

    /// Encode application data into a record and append it.
    pub async fn append_data<T: Serialize + ?Sized>(&self, data: &T) -> Result<Record> {
        let record = Record::create(data)?;
        self.append(record).await
    }

    /// Validate every record in the chain.
    ///
    /// Failures are collected without short-circuiting; an empty list
    /// means the chain is intact. Read-only.
    pub async fn validate(&self) -> Vec<ChainFault> {
        let records = self.records.read().await;
        validate_records(&records)
    }

    /// Highest position in the chain, `-1` when empty.
    pub async fn height(&self) -> i64 {
        let records = self.records.read().await;
        records.len() as i64 - 1
    }

    /// Number of records, anchor included.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the chain holds no records at all.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// The most recently appended record.
    pub async fn tip(&self) -> Option<Record> {
        self.records.read().await.last().cloned()
    }

    /// The record at the given position.
    pub async fn record_at(&self, position: u64) -> Option<Record> {
        self.records.read().await.get(position as usize).cloned()
    }

    /// Cloned view of every record, in chain order.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    /// Rendered text of every record, in chain order.
    pub async fn render(&self) -> Vec<String> {
        let records = self.records.read().await;
        records.iter().map(ToString::to_string).collect()
    }

    /// Emit every record's rendering to the log sink.
    pub async fn print(&self) {
        for rendered in self.render().await {
            tracing::info!("{}", rendered);
        }
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_chain_holds_only_the_anchor() {
        let chain = Chain::new().await;
        assert_eq!(chain.height().await, 0);
        assert_eq!(chain.len().await, 1);

        let anchor = chain.record_at(0).await.unwrap();
        assert!(anchor.is_anchor());
        assert_eq!(anchor.position, 0);
        assert_eq!(anchor.prev_digest, Digest::ZERO);
        assert!(anchor.digest.is_some());
    }

    #[tokio::test]
    async fn test_append_stamps_and_links() {
        let chain = Chain::new().await;
        let anchor = chain.tip().await.unwrap();

        let appended = chain.append_data("Block #1").await.unwrap();
        assert_eq!(appended.position, 1);
        assert_eq!(Some(appended.prev_digest), anchor.digest);
        assert!(appended.timestamp_ms > 0);

        // The stored record matches the returned one.
        assert_eq!(chain.tip().await.unwrap(), appended);
        assert_eq!(chain.height().await, 1);
    }

    #[tokio::test]
    async fn test_digest_is_computed_over_stamped_fields() {
        let chain = Chain::new().await;
        let appended = chain.append_data("Block #1").await.unwrap();
        assert_eq!(appended.digest, Some(appended.compute_digest()));
    }

    #[tokio::test]
    async fn test_validate_clean_chain() {
        let chain = Chain::new().await;
        chain.append_data("Block #1").await.unwrap();
        chain.append_data("Block #2").await.unwrap();
        assert!(chain.validate().await.is_empty());
    }

    #[tokio::test]
    async fn test_from_records_empty_has_height_minus_one() {
        let chain = Chain::from_records(Vec::new());
        assert_eq!(chain.height().await, -1);
        assert!(chain.is_empty().await);
    }

    #[tokio::test]
    async fn test_render_covers_every_record() {
        let chain = Chain::new().await;
        chain.append_data("Block #1").await.unwrap();

        let rendered = chain.render().await;
        assert_eq!(rendered.len(), 2);
        assert!(rendered[1].contains("position: 1"));
    }
}
