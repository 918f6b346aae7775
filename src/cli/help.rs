//! CLI help: command-name contract for logging and routing.

use crate::cli::parse::{Commands, NodeCommands};

/// Command name string for logging (e.g. "node.ls", "update").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Init { .. } => "init".to_string(),
        Commands::Join { .. } => "join".to_string(),
        Commands::Leave { .. } => "leave".to_string(),
        Commands::Node { command } => match command {
            Some(command) => format!("node.{}", node_command_name(command)),
            None => "node".to_string(),
        },
        Commands::Update { .. } => "update".to_string(),
        Commands::Scale { .. } => "scale".to_string(),
        Commands::Rollback { .. } => "rollback".to_string(),
    }
}

pub fn node_command_name(command: &NodeCommands) -> &'static str {
    match command {
        NodeCommands::Ls { .. } => "ls",
        NodeCommands::Inspect { .. } => "inspect",
        NodeCommands::Promote { .. } => "promote",
        NodeCommands::Demote { .. } => "demote",
        NodeCommands::Ps { .. } => "ps",
        NodeCommands::Rm { .. } => "rm",
        NodeCommands::Update { .. } => "update",
    }
}
