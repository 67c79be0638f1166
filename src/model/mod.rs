//! Ledger-resident records.
//!
//! Both record kinds are stored whole: an update loads the full value,
//! mutates it in memory and writes the full value back.

mod car;
mod registry;

pub use car::{Car, CAR_DOC_TYPE};
pub use registry::{FileRecord, UserFileRegistry};

pub(crate) use registry::parse_count;
