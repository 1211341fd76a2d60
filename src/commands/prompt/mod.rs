// src/commands/prompt/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct PromptCommand;

#[async_trait]
impl Command for PromptCommand {
    fn name(&self) -> &'static str {
        "prompt"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        ctx.session.set_prompt(ctx.operands()).await;
        CommandResult::success(String::new())
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
    async fn test_prompt_sets_words_with_trailing_spaces() {
        let session = Arc::new(Session::new());
        let result = PromptCommand
            .execute(make_ctx(&session, vec!["prompt", "ysh", ">"]))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(session.prompt().await, "ysh > ");
    }

    #[tokio::test]
    async fn test_prompt_without_words_is_a_single_space() {
        let session = Arc::new(Session::new());
        PromptCommand
            .execute(make_ctx(&session, vec!["prompt"]))
            .await;
        assert_eq!(session.prompt().await, " ");
    }
}
