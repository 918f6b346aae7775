//! CLI domain: parse, route, help, and output only.
//! No command semantics here; a single route table dispatches to the swarm
//! command service.

mod help;
mod output;
mod parse;
mod route;

pub use help::{command_name, node_command_name};
pub use output::map_error;
pub use parse::{Cli, Commands, NodeCommands};
pub use route::RunContext;
