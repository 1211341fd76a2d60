// src/commands/mkdir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let operands = ctx.operands();
        if operands.is_empty() {
            return CommandResult::error(format!("mkdir: {}\n", FsError::MissingOperand));
        }
        if operands.len() > 1 {
            return CommandResult::error(format!("mkdir: {}\n", FsError::TooManyOperands));
        }

        match ctx.session.mkdir(&operands[0]).await {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("mkdir: {}\n", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Session;
    use std::sync::Arc;

    fn make_ctx(session: &Arc<Session>, args: Vec<&str>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            session: session.clone(),
        }
    }

    #[tokio::test]
    async fn test_mkdir_simple() {
        let session = Arc::new(Session::new());
        let result = MkdirCommand
            .execute(make_ctx(&session, vec!["mkdir", "a"]))
            .await;
        assert_eq!(result.exit_code, 0);
        session.cd(Some("a")).await.unwrap();
        assert_eq!(session.pwd().await, "/a");
    }

    #[tokio::test]
    async fn test_mkdir_missing_operand() {
        let session = Arc::new(Session::new());
        let result = MkdirCommand.execute(make_ctx(&session, vec!["mkdir"])).await;
        assert_eq!(result.stderr, "mkdir: missing operand\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_mkdir_too_many_operands() {
        let session = Arc::new(Session::new());
        let result = MkdirCommand
            .execute(make_ctx(&session, vec!["mkdir", "a", "b"]))
            .await;
        assert_eq!(result.stderr, "mkdir: too many operands\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_mkdir_existing_name_fails() {
        let session = Arc::new(Session::new());
        session.make(&["f".to_string()]).await.unwrap();
        let result = MkdirCommand
            .execute(make_ctx(&session, vec!["mkdir", "f"]))
            .await;
        assert_eq!(result.stderr, "mkdir: f: file already exists\n");
        assert_eq!(result.exit_code, 1);
    }
}
