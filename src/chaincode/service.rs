//! Chaincode - command table lookup and dispatch.

use tracing::{info, warn};

use crate::config::ChaincodeConfig;
use crate::error::ChaincodeError;
use crate::ledger::Ledger;

use super::context::Context;
use super::handlers::{self, Command};
use super::response::{Invocation, Response};

/// Routes invocations to handlers against one ledger.
///
/// Generic over `L`, the ledger engine. Each invocation is a single unit of
/// work; isolation between concurrent invocations is the ledger's job.
pub struct Chaincode<L> {
    ledger: L,
    config: ChaincodeConfig,
}

impl<L: Ledger> Chaincode<L> {
    /// Create a chaincode with the default configuration.
    pub fn new(ledger: L) -> Self {
        Self::with_config(ledger, ChaincodeConfig::default())
    }

    pub fn with_config(ledger: L, config: ChaincodeConfig) -> Self {
        Self { ledger, config }
    }

    /// Instantiate hook. Always succeeds.
    pub fn init(&self) -> Response {
        info!(chaincode = %self.config.name, "instantiated");
        Response::success(Vec::new())
    }

    /// Look up `function`, check arity, then run the handler.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        let command = Self::command(function)?;
        if args.len() != command.arity {
            return Err(ChaincodeError::InvalidArgumentCount {
                function: command.name.to_string(),
                expected: command.arity,
                actual: args.len(),
                usage: command.usage,
            });
        }

        let ctx = Context::new(command.name, args, &self.ledger, &self.config);
        (command.handle)(&ctx)
    }

    /// Dispatch an [`Invocation`], returning a [`Response`].
    pub fn invoke(&self, invocation: &Invocation) -> Response {
        info!(function = %invocation.function, args = invocation.args.len(), "invoke");
        match self.dispatch(&invocation.function, &invocation.args) {
            Ok(payload) => {
                info!(function = %invocation.function, bytes = payload.len(), "invoke succeeded");
                Response::success(payload)
            }
            Err(err) => {
                warn!(function = %invocation.function, error = %err, "invoke failed");
                Response::error(&err)
            }
        }
    }

    /// Resolve a function name or alias.
    pub fn command(function: &str) -> Result<&'static Command, ChaincodeError> {
        handlers::lookup(function).ok_or_else(|| ChaincodeError::UnknownCommand(function.to_string()))
    }

    /// Canonical command names, in registration order.
    pub fn commands(&self) -> Vec<&'static str> {
        handlers::COMMANDS.iter().map(|c| c.name).collect()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }
}
