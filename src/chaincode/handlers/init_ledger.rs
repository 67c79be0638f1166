//! Handler: initLedger
//!
//! Seed hook run once after instantiation. The ledger starts empty; cars and
//! users are created through their own commands.

use tracing::info;

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "initLedger";
pub const ARITY: usize = 0;
pub const USAGE: &str = "initLedger";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    info!(chaincode = %ctx.config().name, function = ctx.function(), "ledger initialised");
    Ok(Vec::new())
}
