//! Ledger - the ordered key-value store of record.
//!
//! The chaincode never owns state. Every operation reads and writes through a
//! [`Ledger`], which is supplied by the hosting engine (consensus, MVCC and
//! commit all live behind it). [`InMemoryLedger`] is the reference engine used
//! for tests and local runs.
//!
//! ## Example
//!
//! ```ignore
//! use asset_ledger::{InMemoryLedger, Ledger};
//!
//! let ledger = InMemoryLedger::new();
//! ledger.put_state("CAR0", b"{}".to_vec())?;
//! assert_eq!(ledger.get_state("CAR0")?, b"{}".to_vec());
//! assert!(ledger.get_state("CAR1")?.is_empty());
//! ```

mod in_memory;
mod iterator;

use thiserror::Error;

pub use in_memory::InMemoryLedger;
pub use iterator::{KeyValue, RangeScan, StateIterator};

/// Error raised by the ledger engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("ledger lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("ledger backend error: {0}")]
    Backend(String),
}

/// Ordered key-value store consumed by the chaincode.
///
/// Object safe, so handlers work against `&dyn Ledger`.
pub trait Ledger: Send + Sync {
    /// Point read. An absent key yields an empty vector.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Point write of a whole value.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Ascending scan over `[start, end)`.
    ///
    /// The returned cursor must be drained or closed; wrap it in a
    /// [`RangeScan`] to get that for free.
    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + '_>, StoreError>;
}

impl<T: Ledger + ?Sized> Ledger for &T {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).put_state(key, value)
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + '_>, StoreError> {
        (**self).get_state_by_range(start, end)
    }
}

impl<T: Ledger + ?Sized> Ledger for std::sync::Arc<T> {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.as_ref().get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.as_ref().put_state(key, value)
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator + '_>, StoreError> {
        self.as_ref().get_state_by_range(start, end)
    }
}
