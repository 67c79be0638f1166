//! Chaincode integration tests.

mod assets;
mod files;
mod failures;

#[cfg(feature = "http")]
mod http;
