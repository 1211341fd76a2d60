// src/commands/pwd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if !ctx.operands().is_empty() {
            return CommandResult::error(format!("pwd: {}\n", FsError::TooManyOperands));
        }

        CommandResult::success(format!("{}\n", ctx.session.pwd().await))
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
    async fn test_pwd_at_root() {
        let session = Arc::new(Session::new());
        let result = PwdCommand.execute(make_ctx(&session, vec!["pwd"])).await;
        assert_eq!(result.stdout, "/\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_pwd_nested() {
        let session = Arc::new(Session::new());
        session.mkdir("a").await.unwrap();
        session.cd(Some("a")).await.unwrap();
        session.mkdir("b").await.unwrap();
        session.cd(Some("b")).await.unwrap();
        let result = PwdCommand.execute(make_ctx(&session, vec!["pwd"])).await;
        assert_eq!(result.stdout, "/a/b\n");
    }

    #[tokio::test]
    async fn test_pwd_rejects_operands() {
        let session = Arc::new(Session::new());
        let result = PwdCommand
            .execute(make_ctx(&session, vec!["pwd", "x"]))
            .await;
        assert_eq!(result.stderr, "pwd: too many operands\n");
        assert_eq!(result.exit_code, 1);
    }
}
