//! Swarmctl: swarm command translation
//!
//! Translates structured, user-facing options (named options,
//! comma-separated lists, boolean flags) into the exact argument vector a
//! container-orchestration backend expects, and dispatches to the matching
//! backend subcommand. The layer never talks to a cluster itself; it only
//! prepares and forwards commands to one.

pub mod args;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod swarm;
