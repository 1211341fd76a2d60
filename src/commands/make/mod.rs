// src/commands/make/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct MakeCommand;

#[async_trait]
impl Command for MakeCommand {
    fn name(&self) -> &'static str {
        "make"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let operands = ctx.operands();
        if operands.is_empty() {
            return CommandResult::error(format!("make: {}\n", FsError::MissingOperand));
        }

        match ctx.session.make(operands).await {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("make: {}\n", e)),
        }
    }
}
