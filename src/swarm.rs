//! Swarm command handlers: each public entry point validates its
//! parameters, builds its argument vector, and issues exactly one backend
//! call. Validation happens strictly before argument building; a failed
//! validation leaves no partial side effects.

use crate::args::{split_targets, ArgBuilder};
use crate::backend::{BackendInvoker, BackendOutput, CommandDescriptor};
use crate::error::SwarmError;

/// Options accepted by the service `update` command.
///
/// Booleans are flags, scalars are single-value options, and `env_add` /
/// `label_add` are comma-separated lists expanded into repeated flag/value
/// pairs. `options` is an unvalidated raw passthrough appended after all
/// structured flags.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub services: String,
    pub image: Option<String>,
    pub replicas: Option<String>,
    pub env_add: Option<String>,
    pub label_add: Option<String>,
    pub detach: bool,
    pub quiet: bool,
    pub force: bool,
    pub rollback: bool,
    pub options: Option<String>,
}

/// Options accepted by the service `rollback` command.
#[derive(Debug, Clone, Default)]
pub struct RollbackOptions {
    pub services: String,
    pub detach: bool,
    pub quiet: bool,
    pub options: Option<String>,
}

/// Node sub-actions. Exactly one (or none) is selected per call; the
/// tagged enum makes "more than one" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAction {
    Ls {
        options: Option<String>,
    },
    Inspect {
        nodes: String,
        options: Option<String>,
    },
    Promote {
        nodes: String,
        options: Option<String>,
    },
    Demote {
        nodes: String,
        options: Option<String>,
    },
    Ps {
        nodes: String,
        options: Option<String>,
    },
    Rm {
        nodes: String,
        options: Option<String>,
    },
    Update {
        nodes: String,
        options: Option<String>,
    },
}

impl NodeAction {
    /// Sub-action name as the backend spells it.
    pub fn name(&self) -> &'static str {
        match self {
            NodeAction::Ls { .. } => "ls",
            NodeAction::Inspect { .. } => "inspect",
            NodeAction::Promote { .. } => "promote",
            NodeAction::Demote { .. } => "demote",
            NodeAction::Ps { .. } => "ps",
            NodeAction::Rm { .. } => "rm",
            NodeAction::Update { .. } => "update",
        }
    }
}

fn require_nodes(nodes: &str, command: &str) -> Result<Vec<String>, SwarmError> {
    if nodes.is_empty() {
        return Err(SwarmError::InvalidParameter(format!(
            "Node name(s) must be provided for the \"{command}\" command."
        )));
    }
    Ok(split_targets(nodes))
}

fn require_services(services: &str, command: &str) -> Result<Vec<String>, SwarmError> {
    if services.is_empty() {
        return Err(SwarmError::InvalidParameter(format!(
            "Service name(s) must be provided for the \"{command}\" command \
             (use --services service1,service2)."
        )));
    }
    Ok(split_targets(services))
}

/// Stateless handlers for the swarm verbs. One handler per operation; each
/// reconstructs its argument vector from scratch per invocation.
pub struct SwarmCommandService;

impl SwarmCommandService {
    /// Initialize a swarm. Target-less; structured flags are not modeled,
    /// everything rides in the raw passthrough.
    pub fn init(
        invoker: &dyn BackendInvoker,
        options: Option<&str>,
    ) -> Result<BackendOutput, SwarmError> {
        let args = ArgBuilder::new().raw(options).build();
        invoker.run(&CommandDescriptor::new("init").args(args))
    }

    /// Join an existing swarm. Target-less.
    pub fn join(
        invoker: &dyn BackendInvoker,
        token: Option<&str>,
        options: Option<&str>,
    ) -> Result<BackendOutput, SwarmError> {
        let args = ArgBuilder::new()
            .scalar("--token", token)
            .raw(options)
            .build();
        invoker.run(&CommandDescriptor::new("join").args(args))
    }

    /// Leave the swarm. Target-less.
    pub fn leave(
        invoker: &dyn BackendInvoker,
        force: bool,
        options: Option<&str>,
    ) -> Result<BackendOutput, SwarmError> {
        let args = ArgBuilder::new()
            .flag("--force", force)
            .raw(options)
            .build();
        invoker.run(&CommandDescriptor::new("leave").args(args))
    }

    /// Dispatch a node sub-action. `None` means no sub-action was selected:
    /// a warning is emitted once and the backend is never invoked. All
    /// sub-actions except `ls` require a node target list.
    pub fn node(
        invoker: &dyn BackendInvoker,
        action: Option<NodeAction>,
    ) -> Result<Option<BackendOutput>, SwarmError> {
        let Some(action) = action else {
            tracing::warn!(
                "No node action selected; expected one of ls, inspect, promote, demote, ps, rm, update"
            );
            return Ok(None);
        };

        let name = action.name();
        let (targets, options) = match &action {
            NodeAction::Ls { options } => (Vec::new(), options.clone()),
            NodeAction::Inspect { nodes, options }
            | NodeAction::Promote { nodes, options }
            | NodeAction::Demote { nodes, options }
            | NodeAction::Ps { nodes, options }
            | NodeAction::Rm { nodes, options }
            | NodeAction::Update { nodes, options } => {
                (require_nodes(nodes, name)?, options.clone())
            }
        };

        let args = ArgBuilder::new().raw(options.as_deref()).build();
        invoker
            .run(
                &CommandDescriptor::new("node")
                    .action(name)
                    .targets(targets)
                    .args(args),
            )
            .map(Some)
    }

    /// Update one or more services. Structured flags are emitted in fixed
    /// order, then the raw passthrough.
    pub fn update(
        invoker: &dyn BackendInvoker,
        opts: &UpdateOptions,
    ) -> Result<BackendOutput, SwarmError> {
        let targets = require_services(&opts.services, "update")?;
        let args = ArgBuilder::new()
            .scalar("--image", opts.image.as_deref())
            .scalar("--replicas", opts.replicas.as_deref())
            .list("--env-add", opts.env_add.as_deref())
            .list("--label-add", opts.label_add.as_deref())
            .flag("--detach", opts.detach)
            .flag("--quiet", opts.quiet)
            .flag("--force", opts.force)
            .flag("--rollback", opts.rollback)
            .raw(opts.options.as_deref())
            .build();
        invoker.run(&CommandDescriptor::new("update").targets(targets).args(args))
    }

    /// Scale one or more services. The replica counts ride in the target
    /// strings (`name=count` pairs, passed verbatim), not in the argument
    /// vector.
    pub fn scale(
        invoker: &dyn BackendInvoker,
        services: &str,
        replicas: &str,
        options: Option<&str>,
    ) -> Result<BackendOutput, SwarmError> {
        require_services(services, "scale")?;
        if replicas.is_empty() {
            return Err(SwarmError::InvalidParameter(
                "Replica pair(s) in the form service=count must be provided for the \
                 \"scale\" command (use --replicas service1=2,service2=5)."
                    .to_string(),
            ));
        }
        let targets = split_targets(replicas);
        let args = ArgBuilder::new().raw(options).build();
        invoker.run(&CommandDescriptor::new("scale").targets(targets).args(args))
    }

    /// Roll back one or more services to their previous specification.
    pub fn rollback(
        invoker: &dyn BackendInvoker,
        opts: &RollbackOptions,
    ) -> Result<BackendOutput, SwarmError> {
        let targets = require_services(&opts.services, "rollback")?;
        let args = ArgBuilder::new()
            .flag("--detach", opts.detach)
            .flag("--quiet", opts.quiet)
            .raw(opts.options.as_deref())
            .build();
        invoker.run(
            &CommandDescriptor::new("rollback")
                .targets(targets)
                .args(args),
        )
    }
}
