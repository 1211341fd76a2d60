// src/commands/stubs.rs
//! Removal and recursive listing are not part of this file system; the
//! commands exist in the dispatch table but always report not supported.

use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::error(format!("rm: {}\n", FsError::NotSupported))
    }
}

pub struct RmrCommand;

#[async_trait]
impl Command for RmrCommand {
    fn name(&self) -> &'static str {
        "rmr"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::error(format!("rmr: {}\n", FsError::NotSupported))
    }
}

pub struct LsrCommand;

#[async_trait]
impl Command for LsrCommand {
    fn name(&self) -> &'static str {
        "lsr"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::error(format!("lsr: {}\n", FsError::NotSupported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Session;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_stubs_fail_without_mutating() {
        let session = Arc::new(Session::new());
        session.make(&["f".to_string()]).await.unwrap();
        let ctx = CommandContext {
            args: vec!["rm".to_string(), "f".to_string()],
            session: session.clone(),
        };
        let result = RmCommand.execute(ctx).await;
        assert_eq!(result.stderr, "rm: not supported\n");
        assert_eq!(result.exit_code, 1);
        // the file is untouched
        assert_eq!(session.cat("f").await.unwrap(), "");
    }
}
