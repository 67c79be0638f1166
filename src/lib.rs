pub mod assets;
pub mod chaincode;
pub mod codec;
pub mod config;
mod error;
pub mod files;
pub mod ledger;
pub mod model;
pub mod query;

pub use assets::AssetRegistry;
pub use chaincode::{Chaincode, Command, Context, Invocation, Response};
pub use config::{ChaincodeConfig, KeyRange};
pub use error::ChaincodeError;
pub use files::{FileLedger, Transfer};
pub use ledger::{InMemoryLedger, KeyValue, Ledger, RangeScan, StateIterator, StoreError};
pub use model::{Car, FileRecord, UserFileRegistry, CAR_DOC_TYPE};
pub use query::{CarScan, QueryEngine, QueryResult};
