//! CLI route: single route table and run context. Dispatches each command
//! to exactly one swarm service handler and surfaces backend output.

use crate::backend::{BackendInvoker, BackendOutput, DryRunInvoker, ProcessInvoker};
use crate::cli::command_name;
use crate::cli::parse::{Commands, NodeCommands};
use crate::config::SwarmctlConfig;
use crate::error::SwarmError;
use crate::swarm::{NodeAction, RollbackOptions, SwarmCommandService, UpdateOptions};

/// Runtime context for CLI execution: the chosen backend invoker.
pub struct RunContext {
    invoker: Box<dyn BackendInvoker>,
}

impl RunContext {
    /// Build from loaded configuration. A CLI-level backend override wins
    /// over the configured program; dry runs never build a process invoker.
    pub fn new(
        config: &SwarmctlConfig,
        backend_override: Option<&str>,
        dry_run: bool,
    ) -> Result<Self, SwarmError> {
        config.validate()?;
        let invoker: Box<dyn BackendInvoker> = if dry_run {
            Box::new(DryRunInvoker)
        } else {
            let program = backend_override.unwrap_or(&config.backend.program);
            Box::new(ProcessInvoker::new(program))
        };
        Ok(Self { invoker })
    }

    #[cfg(test)]
    pub(crate) fn with_invoker(invoker: Box<dyn BackendInvoker>) -> Self {
        Self { invoker }
    }

    /// Execute a CLI command via the single route table. Returns the
    /// backend stdout; the no-sub-action case returns an empty string.
    pub fn execute(&self, command: &Commands) -> Result<String, SwarmError> {
        tracing::info!(command = %command_name(command), "executing command");
        let invoker = self.invoker.as_ref();

        let output = match command {
            Commands::Init { options } => {
                Some(SwarmCommandService::init(invoker, options.as_deref())?)
            }
            Commands::Join { token, options } => Some(SwarmCommandService::join(
                invoker,
                token.as_deref(),
                options.as_deref(),
            )?),
            Commands::Leave { force, options } => Some(SwarmCommandService::leave(
                invoker,
                *force,
                options.as_deref(),
            )?),
            Commands::Node { command } => {
                SwarmCommandService::node(invoker, command.as_ref().map(node_action))?
            }
            Commands::Update {
                services,
                image,
                replicas,
                env_add,
                label_add,
                detach,
                quiet,
                force,
                rollback,
                options,
            } => {
                let opts = UpdateOptions {
                    services: services.clone(),
                    image: image.clone(),
                    replicas: replicas.clone(),
                    env_add: env_add.clone(),
                    label_add: label_add.clone(),
                    detach: *detach,
                    quiet: *quiet,
                    force: *force,
                    rollback: *rollback,
                    options: options.clone(),
                };
                Some(SwarmCommandService::update(invoker, &opts)?)
            }
            Commands::Scale {
                services,
                replicas,
                options,
            } => Some(SwarmCommandService::scale(
                invoker,
                services,
                replicas,
                options.as_deref(),
            )?),
            Commands::Rollback {
                services,
                detach,
                quiet,
                options,
            } => {
                let opts = RollbackOptions {
                    services: services.clone(),
                    detach: *detach,
                    quiet: *quiet,
                    options: options.clone(),
                };
                Some(SwarmCommandService::rollback(invoker, &opts)?)
            }
        };

        Ok(output.map(render_output).unwrap_or_default())
    }
}

/// Translate clap node subcommands into the service-level action enum.
fn node_action(command: &NodeCommands) -> NodeAction {
    match command {
        NodeCommands::Ls { options } => NodeAction::Ls {
            options: options.clone(),
        },
        NodeCommands::Inspect { nodes, options } => NodeAction::Inspect {
            nodes: nodes.clone(),
            options: options.clone(),
        },
        NodeCommands::Promote { nodes, options } => NodeAction::Promote {
            nodes: nodes.clone(),
            options: options.clone(),
        },
        NodeCommands::Demote { nodes, options } => NodeAction::Demote {
            nodes: nodes.clone(),
            options: options.clone(),
        },
        NodeCommands::Ps { nodes, options } => NodeAction::Ps {
            nodes: nodes.clone(),
            options: options.clone(),
        },
        NodeCommands::Rm { nodes, options } => NodeAction::Rm {
            nodes: nodes.clone(),
            options: options.clone(),
        },
        NodeCommands::Update { nodes, options } => NodeAction::Update {
            nodes: nodes.clone(),
            options: options.clone(),
        },
    }
}

/// Backend stderr is surfaced as a warning; stdout is the command output.
fn render_output(output: BackendOutput) -> String {
    if !output.stderr.trim().is_empty() {
        tracing::warn!(stderr = %output.stderr.trim_end(), "backend reported warnings");
    }
    output.stdout
}
