//! Handler: changeCarowner

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "changeCarowner";
pub const ALIAS: &str = "changeCarOwner";
pub const ARITY: usize = 2;
pub const USAGE: &str = "changeCarowner <carId> <newOwner>";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    ctx.assets().change_car_owner(ctx.arg(0), ctx.arg(1))?;
    Ok(Vec::new())
}
