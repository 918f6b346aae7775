//! CLI parse: clap types for swarmctl. No behavior; definitions only.
//!
//! `services` and `nodes` default to the empty string on purpose: the
//! required-target policy and its exact messages belong to the validator,
//! not to clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Swarmctl - swarm command translation for orchestration backends
#[derive(Parser)]
#[command(name = "swarmctl")]
#[command(about = "Translate structured options into backend swarm commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for swarmctl.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend program to invoke (overrides configuration)
    #[arg(long)]
    pub backend: Option<String>,

    /// Print the translated command as JSON instead of invoking the backend
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a swarm on the current engine
    Init {
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Join an existing swarm
    Join {
        /// Join token for the target swarm
        #[arg(long)]
        token: Option<String>,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Leave the swarm
    Leave {
        /// Leave even if this node is a manager
        #[arg(long)]
        force: bool,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Manage swarm nodes
    Node {
        #[command(subcommand)]
        command: Option<NodeCommands>,
    },
    /// Update one or more services
    Update {
        /// Comma-separated service name(s)
        #[arg(long, default_value = "")]
        services: String,
        /// New image for the service
        #[arg(long)]
        image: Option<String>,
        /// Number of replicas
        #[arg(long)]
        replicas: Option<String>,
        /// Comma-separated KEY=VALUE environment variables to add
        #[arg(long)]
        env_add: Option<String>,
        /// Comma-separated key=value labels to add
        #[arg(long)]
        label_add: Option<String>,
        /// Exit immediately instead of waiting for convergence
        #[arg(long)]
        detach: bool,
        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
        /// Force update even if no changes require it
        #[arg(long)]
        force: bool,
        /// Roll back to the previous specification
        #[arg(long)]
        rollback: bool,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Scale one or more replicated services
    Scale {
        /// Comma-separated service name(s)
        #[arg(long, default_value = "")]
        services: String,
        /// Comma-separated service=count pairs
        #[arg(long, default_value = "")]
        replicas: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Roll back one or more services
    Rollback {
        /// Comma-separated service name(s)
        #[arg(long, default_value = "")]
        services: String,
        /// Exit immediately instead of waiting for convergence
        #[arg(long)]
        detach: bool,
        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum NodeCommands {
    /// List swarm nodes
    Ls {
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Inspect one or more nodes
    Inspect {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Promote one or more nodes to manager
    Promote {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Demote one or more nodes from manager
    Demote {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// List tasks running on one or more nodes
    Ps {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Remove one or more nodes
    Rm {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
    /// Update one or more nodes
    Update {
        /// Comma-separated node name(s)
        #[arg(default_value = "")]
        nodes: String,
        /// Extra backend options, passed through verbatim
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,
    },
}
