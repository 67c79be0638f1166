//! Handler: createCar

use crate::chaincode::Context;
use crate::error::ChaincodeError;
use crate::model::Car;

pub const COMMAND: &str = "createCar";
pub const ARITY: usize = 5;
pub const USAGE: &str = "createCar <carId> <make> <model> <color> <owner>";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    let car = Car::new(ctx.arg(1), ctx.arg(2), ctx.arg(3), ctx.arg(4));
    ctx.assets().create_car(ctx.arg(0), &car)?;
    Ok(Vec::new())
}
