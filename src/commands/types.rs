// src/commands/types.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::fs::Session;

/// Command execution result.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// Command execution context. `args` is the full word list of the
/// invocation; word 0 is the command name itself.
pub struct CommandContext {
    pub args: Vec<String>,
    pub session: Arc<Session>,
}

impl CommandContext {
    /// The operand words, i.e. everything after the command name.
    pub fn operands(&self) -> &[String] {
        if self.args.is_empty() {
            &[]
        } else {
            &self.args[1..]
        }
    }
}

/// Command trait.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}
