//! Handler: queryAllCars

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "queryAllCars";
pub const ARITY: usize = 0;
pub const USAGE: &str = "queryAllCars";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    ctx.queries().query_all_cars_json()
}
