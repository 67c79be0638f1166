//! Command handlers, one per file.
//!
//! Each handler module exports:
//! - `COMMAND: &str` - the function name it answers to
//! - `ARITY: usize` - exact number of arguments, checked before `handle`
//! - `USAGE: &str` - argument hint for the arity error
//! - `handle(ctx) -> Result<Vec<u8>, ChaincodeError>` - the handler

use crate::error::ChaincodeError;

use super::context::Context;

pub mod change_car_owner;
pub mod create_car;
pub mod create_file;
pub mod create_user;
pub mod init_ledger;
pub mod query_all_cars;
pub mod query_car;
pub mod transfer_file;

/// A registered command.
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub arity: usize,
    pub usage: &'static str,
    pub handle: fn(&Context<'_>) -> Result<Vec<u8>, ChaincodeError>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Build the command table from handler modules following the convention.
macro_rules! commands {
    ($( $module:ident ),+ $(,)?) => {
        &[
            $(
                Command {
                    name: $module::COMMAND,
                    arity: $module::ARITY,
                    usage: $module::USAGE,
                    handle: $module::handle,
                },
            )+
        ]
    };
}

/// Every command the chaincode answers to.
pub static COMMANDS: &[Command] = commands![
    init_ledger,
    create_car,
    query_car,
    change_car_owner,
    query_all_cars,
    create_user,
    create_file,
    transfer_file,
];

/// Alternate spellings accepted by the dispatcher, mapped to canonical names.
pub static ALIASES: &[(&str, &str)] = &[(change_car_owner::ALIAS, change_car_owner::COMMAND)];

/// Resolve a function name (or alias) to its command.
pub fn lookup(function: &str) -> Option<&'static Command> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == function)
        .map_or(function, |(_, canonical)| *canonical);
    COMMANDS.iter().find(|command| command.name == name)
}
