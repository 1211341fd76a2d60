// src/commands/cat/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let files = ctx.operands();
        if files.is_empty() {
            return CommandResult::error(format!("cat: {}\n", FsError::MissingOperand));
        }

        let mut stdout = String::new();
        for file in files {
            match ctx.session.cat(file).await {
                Ok(content) => {
                    stdout.push_str(&content);
                    stdout.push('\n');
                }
                // Abort the command at the first failure, keeping any
                // output already produced.
                Err(e) => {
                    return CommandResult::with_exit_code(stdout, format!("cat: {}\n", e), 1);
                }
            }
        }

        CommandResult::success(stdout)
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

    async fn session_with_file(name: &str, content: &[&str]) -> Arc<Session> {
        let session = Arc::new(Session::new());
        let mut words = vec![name.to_string()];
        words.extend(content.iter().map(|s| s.to_string()));
        session.make(&words).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_cat_single_file() {
        let session = session_with_file("f", &["hello", "world"]).await;
        let result = CatCommand.execute(make_ctx(&session, vec!["cat", "f"])).await;
        assert_eq!(result.stdout, "hello world\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_cat_multiple_files_one_line_each() {
        let session = session_with_file("a", &["aaa"]).await;
        session
            .make(&["b".to_string(), "bbb".to_string()])
            .await
            .unwrap();
        let result = CatCommand
            .execute(make_ctx(&session, vec!["cat", "a", "b"]))
            .await;
        assert_eq!(result.stdout, "aaa\nbbb\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_cat_no_operands() {
        let session = Arc::new(Session::new());
        let result = CatCommand.execute(make_ctx(&session, vec!["cat"])).await;
        assert_eq!(result.stderr, "cat: missing operand\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_cat_not_found() {
        let session = Arc::new(Session::new());
        let result = CatCommand
            .execute(make_ctx(&session, vec!["cat", "ghost"]))
            .await;
        assert_eq!(result.stderr, "cat: ghost: no such file or directory\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_cat_trailing_slash_is_a_directory() {
        let session = Arc::new(Session::new());
        session.mkdir("d").await.unwrap();
        let result = CatCommand
            .execute(make_ctx(&session, vec!["cat", "d/"]))
            .await;
        assert_eq!(result.stderr, "cat: d/: is a directory\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_cat_stops_at_first_failure_keeping_prior_output() {
        let session = session_with_file("a", &["aaa"]).await;
        let result = CatCommand
            .execute(make_ctx(&session, vec!["cat", "a", "ghost", "a"]))
            .await;
        assert_eq!(result.stdout, "aaa\n");
        assert_eq!(result.stderr, "cat: ghost: no such file or directory\n");
        assert_eq!(result.exit_code, 1);
    }
}
