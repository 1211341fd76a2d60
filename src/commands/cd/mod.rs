// src/commands/cd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let operands = ctx.operands();
        if operands.len() > 1 {
            return CommandResult::error(format!("cd: {}\n", FsError::TooManyOperands));
        }

        let target = operands.first().map(String::as_str);
        match ctx.session.cd(target).await {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("cd: {}\n", e)),
        }
    }
}
