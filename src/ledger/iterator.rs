//! Range-scan cursors.

use tracing::warn;

use super::StoreError;

/// One entry yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Cursor over an ordered key range, as handed out by the ledger engine.
pub trait StateIterator {
    /// Next entry in key order. `Ok(None)` is the end-of-data signal.
    fn next(&mut self) -> Result<Option<KeyValue>, StoreError>;

    /// Release the cursor. Calling it more than once is allowed.
    fn close(&mut self) -> Result<(), StoreError>;
}

/// Scoped owner of a [`StateIterator`].
///
/// Yields entries as an [`Iterator`] and closes the underlying cursor exactly
/// once: on end-of-data, on the first error, on [`RangeScan::close`], or when
/// dropped part way through.
pub struct RangeScan<'a> {
    cursor: Option<Box<dyn StateIterator + 'a>>,
}

impl<'a> RangeScan<'a> {
    pub fn new(cursor: Box<dyn StateIterator + 'a>) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// True once the cursor has been released.
    pub fn is_closed(&self) -> bool {
        self.cursor.is_none()
    }

    /// Release the cursor early, surfacing any close error.
    pub fn close(mut self) -> Result<(), StoreError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), StoreError> {
        match self.cursor.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl Iterator for RangeScan<'_> {
    type Item = Result<KeyValue, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        match cursor.next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => self.release().err().map(Err),
            Err(err) => {
                if let Err(close_err) = self.release() {
                    warn!(error = %close_err, "failed to close range cursor after scan error");
                }
                Some(Err(err))
            }
        }
    }
}

impl Drop for RangeScan<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(error = %err, "failed to close range cursor on drop");
        }
    }
}
