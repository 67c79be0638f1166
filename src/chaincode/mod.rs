//! chaincode - invocation dispatch for the asset and file ledgers.
//!
//! A [`Chaincode`] owns a ledger handle and routes each [`Invocation`] to a
//! handler from a fixed command table. Handlers return `Result`; the
//! dispatcher turns the result into a [`Response`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use asset_ledger::{Chaincode, InMemoryLedger, Invocation};
//!
//! let chaincode = Chaincode::new(InMemoryLedger::new());
//! chaincode.invoke(&Invocation::new(
//!     "createCar",
//!     ["CAR0", "Toyota", "Prius", "blue", "Tomoko"],
//! ));
//! let response = chaincode.invoke(&Invocation::new("queryCar", ["CAR0"]));
//! assert!(response.is_ok());
//! ```

mod context;
pub mod handlers;
mod response;
mod service;

pub use context::Context;
pub use handlers::Command;
pub use response::{Invocation, Response, ERROR, OK};
pub use service::Chaincode;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};
