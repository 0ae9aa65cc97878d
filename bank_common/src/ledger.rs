//! The ledger store
//!
//! The canonical, append-only history of all transactions.
//!
//! A single mutex serializes every read and write of the underlying sequence.
//! It is only ever held for the push or the copy; never across balance aggregation or I/O.

use crate::tx::Transaction;
use std::ops::Range;
use std::sync::Arc;
use tokio::sync::Mutex;

/// **A point-in-time, immutable view of the ledger**
///
/// Cheap to clone; clones share the same records.
/// Appends made after the snapshot was taken are not visible through it.
#[derive(Clone, Debug)]
pub struct Snapshot {
    records: Arc<[Transaction]>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.records
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::from(vec![])
    }
}

impl From<Vec<Transaction>> for Snapshot {
    fn from(records: Vec<Transaction>) -> Self {
        Snapshot {
            records: records.into(),
        }
    }
}

/// **A handle to a shared, append-only ledger**
///
/// Cloning the handle shares the ledger; [`LedgerStore::new`] creates an independent one.
#[derive(Clone, Debug, Default)]
pub struct LedgerStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl LedgerStore {
    /// **Creates a new, empty ledger.**
    pub fn new() -> Self {
        LedgerStore {
            transactions: Arc::new(Mutex::new(vec![])),
        }
    }

    /// **Appends a record to the end of the ledger.**
    ///
    /// Never fails; records are never removed or reordered afterwards.
    pub async fn append(&self, tx: Transaction) {
        self.transactions.lock().await.push(tx);
    }

    /// **Takes a snapshot of the whole ledger.**
    pub async fn snapshot(&self) -> Snapshot {
        let copy = self.transactions.lock().await.clone();
        Snapshot::from(copy)
    }

    /// **Copies out the records in `[start, finish)`.**
    ///
    /// Bounds are clamped rather than rejected, see [`clamp_range`].
    pub async fn slice(&self, start: i64, finish: i64) -> Vec<Transaction> {
        let transactions = self.transactions.lock().await;
        let range = clamp_range(start, finish, transactions.len());
        transactions[range].to_vec()
    }

    /// Number of records currently in the ledger.
    pub async fn len(&self) -> usize {
        self.transactions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.lock().await.is_empty()
    }
}

/// **Clamps a requested half-open range to a sequence of length `len`.**
///
/// - Negative bounds are treated as 0.
/// - Bounds past the end are capped at `len`.
/// - If the clamped `start` is not below the clamped `finish`, the range is empty.
///
/// The returned range is always safe to index a slice of length `len` with.
pub fn clamp_range(start: i64, finish: i64, len: usize) -> Range<usize> {
    let clamp = |bound: i64| usize::try_from(bound.max(0)).map_or(len, |b| b.min(len));

    let start = clamp(start);
    let finish = clamp(finish);

    if start >= finish {
        start..start
    } else {
        start..finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposits(amounts: &[f64]) -> Vec<Transaction> {
        amounts
            .iter()
            .map(|&amount| Transaction::deposit(1, amount))
            .collect()
    }

    #[test]
    fn clamp_range_within_bounds() {
        assert_eq!(1..3, clamp_range(1, 3, 5));
    }

    #[test]
    fn clamp_range_caps_at_len() {
        assert_eq!(2..5, clamp_range(2, 100, 5));
        assert_eq!(5..5, clamp_range(100, 200, 5));
    }

    #[test]
    fn clamp_range_normalizes_negatives() {
        assert_eq!(0..3, clamp_range(-10, 3, 5));
        assert!(clamp_range(-10, -1, 5).is_empty());
    }

    #[test]
    fn clamp_range_inverted_is_empty() {
        assert!(clamp_range(4, 2, 5).is_empty());
        assert!(clamp_range(3, 3, 5).is_empty());
    }

    #[test]
    fn clamp_range_empty_sequence() {
        for (start, finish) in [(0, 0), (-5, 5), (3, 10), (i64::MIN, i64::MAX)] {
            assert!(clamp_range(start, finish, 0).is_empty());
        }
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = LedgerStore::new();
        for tx in deposits(&[1.0, 2.0, 3.0]) {
            store.append(tx).await;
        }

        let debits: Vec<f64> = store.snapshot().await.iter().map(|tx| tx.debit).collect();

        assert_eq!(vec![1.0, 2.0, 3.0], debits);
        assert_eq!(3, store.len().await);
    }

    #[tokio::test]
    async fn snapshot_does_not_see_later_appends() {
        let store = LedgerStore::new();
        store.append(Transaction::deposit(1, 10.0)).await;

        let snapshot = store.snapshot().await;
        store.append(Transaction::deposit(1, 20.0)).await;

        assert_eq!(1, snapshot.len());
        assert_eq!(2, store.snapshot().await.len());
    }

    #[tokio::test]
    async fn slice_clamps_bounds() {
        let store = LedgerStore::new();
        for tx in deposits(&[1.0, 2.0, 3.0, 4.0]) {
            store.append(tx).await;
        }

        assert_eq!(deposits_debits(&store.slice(1, 3).await), vec![2.0, 3.0]);
        assert_eq!(deposits_debits(&store.slice(-1, 2).await), vec![1.0, 2.0]);
        assert_eq!(deposits_debits(&store.slice(2, 99).await), vec![3.0, 4.0]);
        assert!(store.slice(3, 1).await.is_empty());
        assert!(store.slice(10, 20).await.is_empty());
    }

    #[tokio::test]
    async fn slice_of_empty_store_is_empty() {
        let store = LedgerStore::new();

        assert!(store.is_empty().await);
        assert!(store.slice(0, 10).await.is_empty());
        assert!(store.slice(-3, -1).await.is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_ledger() {
        let store = LedgerStore::new();
        let other = store.clone();
        let independent = LedgerStore::new();

        other.append(Transaction::deposit(1, 5.0)).await;

        assert_eq!(1, store.len().await);
        assert_eq!(0, independent.len().await);
    }

    fn deposits_debits(txs: &[Transaction]) -> Vec<f64> {
        txs.iter().map(|tx| tx.debit).collect()
    }
}
