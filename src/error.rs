use thiserror::Error;

use crate::ledger::StoreError;

/// Failure of a single chaincode invocation.
///
/// Every handler returns one of these instead of panicking; the dispatcher
/// turns it into an error [`Response`](crate::Response) carrying the message.
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// Wrong number of invocation arguments.
    #[error("incorrect number of arguments for {function}: expecting {expected}, got {actual} ({usage})")]
    InvalidArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
        usage: &'static str,
    },
    /// An argument was present but unusable (e.g. an empty car field).
    #[error("invalid argument for {function}: {reason}")]
    InvalidArgument { function: String, reason: String },
    /// Required key absent or empty on a point lookup.
    #[error("{0} does not exist")]
    NotFound(String),
    /// Duplicate user creation.
    #[error("{0} is already registered")]
    AlreadyExists(String),
    /// Stored value could not be decoded on a strict point read.
    #[error("malformed record at {key}: {reason}")]
    MalformedRecord { key: String, reason: String },
    /// A quantity was not an integer.
    #[error("invalid count {value:?} for {key}")]
    InvalidCount { key: String, value: String },
    /// Underlying get/put/scan failure, propagated verbatim.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    /// No handler registered under this function name.
    #[error("received unknown function {0} invocation")]
    UnknownCommand(String),
    /// Record could not be serialised.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl ChaincodeError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ChaincodeError::InvalidArgumentCount { .. } => 400,
            ChaincodeError::InvalidArgument { .. } => 400,
            ChaincodeError::NotFound(_) => 404,
            ChaincodeError::AlreadyExists(_) => 409,
            ChaincodeError::MalformedRecord { .. } => 422,
            ChaincodeError::InvalidCount { .. } => 422,
            ChaincodeError::Store(_) => 500,
            ChaincodeError::UnknownCommand(_) => 404,
            ChaincodeError::Encode(_) => 500,
        }
    }
}
