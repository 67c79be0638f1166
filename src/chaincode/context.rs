//! Context passed to command handlers.
//!
//! Carries the function name, the already arity-checked arguments, the
//! ledger and the configuration. Handlers reach the domain components
//! through it.

use crate::assets::AssetRegistry;
use crate::config::ChaincodeConfig;
use crate::files::FileLedger;
use crate::ledger::Ledger;
use crate::query::QueryEngine;

pub struct Context<'a> {
    function: &'a str,
    args: &'a [String],
    ledger: &'a dyn Ledger,
    config: &'a ChaincodeConfig,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        function: &'a str,
        args: &'a [String],
        ledger: &'a dyn Ledger,
        config: &'a ChaincodeConfig,
    ) -> Self {
        Self {
            function,
            args,
            ledger,
            config,
        }
    }

    /// The command name being handled.
    pub fn function(&self) -> &str {
        self.function
    }

    /// Positional argument, or `""` past the end.
    pub fn arg(&self, index: usize) -> &'a str {
        self.args.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn ledger(&self) -> &'a dyn Ledger {
        self.ledger
    }

    pub fn config(&self) -> &'a ChaincodeConfig {
        self.config
    }

    pub fn assets(&self) -> AssetRegistry<'a> {
        AssetRegistry::new(self.ledger)
    }

    pub fn files(&self) -> FileLedger<'a> {
        FileLedger::new(self.ledger)
    }

    /// Query engine over the configured car range.
    pub fn queries(&self) -> QueryEngine<'a> {
        QueryEngine::with_range(self.ledger, self.config.car_range.clone())
    }
}
