//! Query engine - bounded range scans over the car key space.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::codec;
use crate::config::KeyRange;
use crate::error::ChaincodeError;
use crate::ledger::{Ledger, RangeScan};

/// One projected scan entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "Key")]
    pub key: String,
    /// Decoded JSON, or the raw string when the value is not JSON.
    #[serde(rename = "Record")]
    pub record: Value,
}

/// Range queries over a borrowed ledger.
pub struct QueryEngine<'a> {
    ledger: &'a dyn Ledger,
    range: KeyRange,
}

impl<'a> QueryEngine<'a> {
    /// Engine over the default car range `["CAR0", "CAR999")`.
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self::with_range(ledger, KeyRange::default())
    }

    pub fn with_range(ledger: &'a dyn Ledger, range: KeyRange) -> Self {
        Self { ledger, range }
    }

    pub fn range(&self) -> &KeyRange {
        &self.range
    }

    /// Lazy, single-pass scan of the configured range.
    pub fn scan(&self) -> Result<CarScan<'a>, ChaincodeError> {
        let ledger: &'a dyn Ledger = self.ledger;
        let cursor = ledger.get_state_by_range(&self.range.start, &self.range.end)?;
        Ok(CarScan {
            rows: RangeScan::new(cursor),
        })
    }

    /// Every car in range, in key order.
    pub fn query_all_cars(&self) -> Result<Vec<QueryResult>, ChaincodeError> {
        let results = self.scan()?.collect::<Result<Vec<_>, _>>()?;
        debug!(
            start = %self.range.start,
            end = %self.range.end,
            count = results.len(),
            "end of data"
        );
        Ok(results)
    }

    /// [`query_all_cars`](Self::query_all_cars) serialised as a JSON array.
    pub fn query_all_cars_json(&self) -> Result<Vec<u8>, ChaincodeError> {
        codec::encode(&self.query_all_cars()?)
    }
}

/// Iterator over projected scan entries.
///
/// Entries with an empty value are skipped. The ledger cursor is released
/// when the scan ends or the iterator is dropped.
pub struct CarScan<'a> {
    rows: RangeScan<'a>,
}

impl CarScan<'_> {
    /// Release the cursor without draining it.
    pub fn close(self) -> Result<(), ChaincodeError> {
        Ok(self.rows.close()?)
    }
}

impl Iterator for CarScan<'_> {
    type Item = Result<QueryResult, ChaincodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.rows.next()? {
                Ok(row) if row.value.is_empty() => continue,
                Ok(row) => {
                    return Some(Ok(QueryResult {
                        record: codec::decode_lenient(&row.value),
                        key: row.key,
                    }))
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}
