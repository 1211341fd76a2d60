//! Shell Environment
//!
//! Ties the command registry to a session: splits input into lines and
//! words, skips comments, dispatches by command name. Quoting and other
//! tokenization refinements are deliberately absent; words are whitespace
//! separated.

use std::sync::Arc;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::Session;

/// Result of executing a script or a line.
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn ok() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        }
    }
}

/// The shell environment: one session, one command table.
pub struct Shell {
    session: Arc<Session>,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Session::new()),
            registry: create_default_registry(),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// The prompt to display before reading a line.
    pub async fn prompt(&self) -> String {
        self.session.prompt().await
    }

    /// Execute one input line. Returns `None` for blank lines and comments
    /// (first word starting with `#`).
    pub async fn exec_line(&self, line: &str) -> Option<CommandResult> {
        let words: Vec<String> = line.split_whitespace().map(String::from).collect();
        let name = words.first()?;
        if name.starts_with('#') {
            return None;
        }
        let Some(cmd) = self.registry.get(name) else {
            return Some(CommandResult::error(format!("{}: no such command\n", name)));
        };
        let ctx = CommandContext {
            args: words,
            session: self.session.clone(),
        };
        Some(cmd.execute(ctx).await)
    }

    /// Execute a script, one command per line. A failed command aborts only
    /// itself; subsequent lines still run. Exit code is 0 iff every command
    /// succeeded.
    pub async fn exec(&self, script: &str) -> ExecResult {
        let mut result = ExecResult::ok();
        for line in script.lines() {
            if let Some(r) = self.exec_line(line).await {
                result.stdout.push_str(&r.stdout);
                result.stderr.push_str(&r.stderr);
                if r.exit_code != 0 {
                    result.exit_code = 1;
                }
            }
        }
        result
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
