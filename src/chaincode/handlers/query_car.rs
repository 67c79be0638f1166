//! Handler: queryCar

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "queryCar";
pub const ARITY: usize = 1;
pub const USAGE: &str = "queryCar <carId>, e.g. CAR01";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    ctx.assets().query_car(ctx.arg(0))
}
