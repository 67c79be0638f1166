//! Handler: transferFile

use crate::chaincode::Context;
use crate::error::ChaincodeError;

pub const COMMAND: &str = "transferFile";
pub const ARITY: usize = 4;
pub const USAGE: &str = "transferFile <fromUser> <toUser> <fileId> <amount>";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    ctx.files()
        .transfer_file(ctx.arg(0), ctx.arg(1), ctx.arg(2), ctx.arg(3))?;
    Ok(Vec::new())
}
