//! InMemoryLedger - BTreeMap-backed ledger for testing and local runs.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{KeyValue, Ledger, StateIterator, StoreError};

/// In-memory ordered ledger.
///
/// Keys are kept in a `BTreeMap`, so range scans come back in lexicographic
/// byte order. Clone-friendly via Arc: clones share the same state.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    open_iterators: Arc<AtomicUsize>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of range cursors handed out and not yet closed.
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(state.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Ledger for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_state"))?;
        Ok(state.get(key).cloned().unwrap_or_default())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::LockPoisoned("put_state"))?;
        debug!(key, bytes = value.len(), "put_state");
        state.insert(key.to_string(), value);
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + '_>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_state_by_range"))?;

        // Empty or inverted ranges would make BTreeMap::range panic.
        let snapshot: Vec<KeyValue> = if start < end {
            state
                .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
                .map(|(key, value)| KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        self.open_iterators.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SnapshotIterator {
            entries: snapshot.into_iter(),
            open: Some(self.open_iterators.clone()),
        }))
    }
}

/// Cursor over a copy of the range taken when the scan opened.
struct SnapshotIterator {
    entries: std::vec::IntoIter<KeyValue>,
    open: Option<Arc<AtomicUsize>>,
}

impl StateIterator for SnapshotIterator {
    fn next(&mut self) -> Result<Option<KeyValue>, StoreError> {
        if self.open.is_none() {
            return Err(StoreError::Backend("range cursor already closed".into()));
        }
        Ok(self.entries.next())
    }

    fn close(&mut self) -> Result<(), StoreError> {
        if let Some(open) = self.open.take() {
            open.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
