//! Handler: createUser

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "createUser";
pub const ARITY: usize = 1;
pub const USAGE: &str = "createUser <userId>";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    ctx.files().create_user(ctx.arg(0))?;
    Ok(Vec::new())
}
