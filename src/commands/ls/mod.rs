// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let operands = ctx.operands();
        if operands.len() > 1 {
            return CommandResult::error(format!("ls: {}\n", FsError::TooManyOperands));
        }

        let target = operands.first().map(String::as_str);
        match ctx.session.ls(target).await {
            Ok(listing) => CommandResult::success(listing),
            Err(e) => CommandResult::error(format!("ls: {}\n", e)),
        }
    }
}
