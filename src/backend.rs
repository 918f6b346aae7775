//! Backend invocation boundary: the command descriptor handed to the
//! backend, the invoker trait, and its process-spawning implementation.

use crate::error::SwarmError;
use serde::{Deserialize, Serialize};
use std::process::Command;

/// The unit of work handed to a backend invoker: a verb, an optional
/// sub-action under that verb, trailing positional targets, and the
/// translated argument vector.
///
/// The verb is never empty. Targets may be empty only for target-less
/// commands (`init`, `join`, `leave`, `node ls`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub verb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub targets: Vec<String>,
    pub args: Vec<String>,
}

impl CommandDescriptor {
    pub fn new(verb: impl Into<String>) -> Self {
        let verb = verb.into();
        debug_assert!(!verb.is_empty(), "command verb must not be empty");
        Self {
            verb,
            action: None,
            targets: Vec::new(),
            args: Vec::new(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Backend subcommand path for this verb. Fixed mapping table: swarm
    /// lifecycle verbs live under `swarm`, service verbs under `service`,
    /// node verbs under `node <action>`.
    pub fn subcommand_path(&self) -> Vec<String> {
        let mut path = match self.verb.as_str() {
            "init" | "join" | "leave" => vec!["swarm".to_string(), self.verb.clone()],
            "update" | "scale" | "rollback" => {
                vec!["service".to_string(), self.verb.clone()]
            }
            _ => vec![self.verb.clone()],
        };
        if let Some(action) = &self.action {
            path.push(action.clone());
        }
        path
    }

    /// Full argv after the backend program: subcommand path, then the
    /// argument vector, then targets as trailing positionals.
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = self.subcommand_path();
        argv.extend(self.args.iter().cloned());
        argv.extend(self.targets.iter().cloned());
        argv
    }
}

/// Captured output of a backend invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes a translated command. Implementations own process lifecycle,
/// timeouts, and exit-status interpretation; the translation core only
/// decides what to hand them.
pub trait BackendInvoker {
    fn run(&self, command: &CommandDescriptor) -> Result<BackendOutput, SwarmError>;
}

/// Invoker that spawns the configured backend program and captures output.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl BackendInvoker for ProcessInvoker {
    fn run(&self, command: &CommandDescriptor) -> Result<BackendOutput, SwarmError> {
        let argv = command.to_argv();
        tracing::debug!(program = %self.program, ?argv, "invoking backend");

        let output = Command::new(&self.program)
            .args(&argv)
            .output()
            .map_err(|source| SwarmError::BackendUnavailable {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(SwarmError::BackendFailed {
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(BackendOutput { stdout, stderr })
    }
}

/// Invoker that renders the descriptor as pretty JSON instead of executing
/// it. Never touches the backend.
#[derive(Debug, Clone, Default)]
pub struct DryRunInvoker;

impl BackendInvoker for DryRunInvoker {
    fn run(&self, command: &CommandDescriptor) -> Result<BackendOutput, SwarmError> {
        let rendered = serde_json::to_string_pretty(command)?;
        Ok(BackendOutput {
            stdout: rendered,
            stderr: String::new(),
        })
    }
}
