//! Handler: createFile

use crate::chaincode::Context;
use crate::error::ChaincodeError;
use crate::model::FileRecord;

pub const COMMAND: &str = "createFile";
pub const ARITY: usize = 6;
pub const USAGE: &str = "createFile <userId> <fileId> <hash> <name> <password> <count>";

pub fn handle(ctx: &Context<'_>) -> Result<Vec<u8>, ChaincodeError> {
    let record = FileRecord::new(ctx.arg(2), ctx.arg(3), ctx.arg(4), ctx.arg(5));
    ctx.files().create_file(ctx.arg(0), ctx.arg(1), record)?;
    Ok(Vec::new())
}
