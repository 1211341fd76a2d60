//! Session
//!
//! Owns the tree, the current-directory reference, the absolute-path stack
//! and the prompt string. All path-oriented operations resolve a single
//! component against the current directory and delegate to the tree.

use tokio::sync::RwLock;

use super::tree::FsTree;
use super::types::{FileKind, FsError, NodeId};

struct SessionState {
    tree: FsTree,
    cwd: NodeId,
    path_stack: Vec<String>,
    prompt: String,
}

/// One logical shell session over an in-memory file tree.
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    /// Create a session rooted at a fresh tree, cwd at root, path stack
    /// `["/"]`, empty prompt.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState {
                tree: FsTree::new(),
                cwd: FsTree::ROOT,
                path_stack: vec!["/".to_string()],
                prompt: String::new(),
            }),
        }
    }

    /// Create or overwrite a plain file in the current directory.
    /// `words[0]` is the filename, the rest the new content. An existing
    /// entry is reused; writing to a directory surfaces the content layer's
    /// wrong-kind failure.
    pub async fn make(&self, words: &[String]) -> Result<(), FsError> {
        let (name, content) = words.split_first().ok_or(FsError::MissingOperand)?;
        if name.ends_with('/') {
            return Err(FsError::IsDirectory(name.clone()));
        }
        let mut state = self.state.write().await;
        let cwd = state.cwd;
        let target = match state.tree.lookup(cwd, name)? {
            Some(id) => id,
            None => state.tree.make_file(cwd, name)?,
        };
        state.tree.node_mut(target).write(content.to_vec())
    }

    /// Create a directory in the current directory.
    pub async fn mkdir(&self, name: &str) -> Result<(), FsError> {
        let mut state = self.state.write().await;
        let cwd = state.cwd;
        if state.tree.node(cwd).file_exists(name)? {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        state.tree.make_directory(cwd, name)?;
        Ok(())
    }

    /// Read a plain file in the current directory, returning its words
    /// space-joined.
    pub async fn cat(&self, name: &str) -> Result<String, FsError> {
        if name.ends_with('/') {
            return Err(FsError::IsDirectory(name.to_string()));
        }
        let state = self.state.read().await;
        let target = state
            .tree
            .lookup(state.cwd, name)?
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        Ok(state.tree.node(target).read()?.join(" "))
    }

    /// Change the current directory. `None` or `Some("/")` returns to root.
    /// Otherwise the target must be a single component naming a directory
    /// entry of the current directory; `..` pops the path stack, any other
    /// name is pushed.
    pub async fn cd(&self, target: Option<&str>) -> Result<(), FsError> {
        let mut state = self.state.write().await;
        let target = match target {
            None | Some("/") => {
                state.cwd = FsTree::ROOT;
                state.path_stack.truncate(1);
                return Ok(());
            }
            Some(name) => name,
        };
        let dest = state
            .tree
            .lookup(state.cwd, target)?
            .ok_or_else(|| FsError::NotFound(target.to_string()))?;
        if state.tree.node(dest).kind() != FileKind::Directory {
            return Err(FsError::NotDirectory(target.to_string()));
        }
        state.cwd = dest;
        if target == ".." {
            if state.path_stack.len() > 1 {
                state.path_stack.pop();
            }
        } else {
            state.path_stack.push(target.to_string());
        }
        Ok(())
    }

    /// Render the absolute path of the current directory.
    pub async fn pwd(&self) -> String {
        let state = self.state.read().await;
        if state.path_stack.len() == 1 {
            "/".to_string()
        } else {
            format!("/{}", state.path_stack[1..].join("/"))
        }
    }

    /// List a directory. With no target, lists the current directory; with
    /// a target, resolves it like `cd` and prints a header line first
    /// (`.` resolved at root renders as `/:`). Lines are column-aligned
    /// id, size, name; directory names other than `.` and `..` carry a
    /// trailing `/`.
    pub async fn ls(&self, target: Option<&str>) -> Result<String, FsError> {
        let state = self.state.read().await;
        let mut out = String::new();
        let dir = match target {
            None => state.cwd,
            Some(name) => {
                let dest = state
                    .tree
                    .lookup(state.cwd, name)?
                    .ok_or_else(|| FsError::NotFound(name.to_string()))?;
                if state.tree.node(dest).kind() != FileKind::Directory {
                    return Err(FsError::NotDirectory(name.to_string()));
                }
                let header = if name == "." && state.cwd == FsTree::ROOT {
                    "/"
                } else {
                    name
                };
                out.push_str(&format!("{}:\n", header));
                dest
            }
        };
        for entry in state.tree.list(dir)? {
            let suffix = if entry.is_dir && entry.name != "." && entry.name != ".." {
                "/"
            } else {
                ""
            };
            out.push_str(&format!(
                "{:>6}  {:>6}  {}{}\n",
                entry.id, entry.size, entry.name, suffix
            ));
        }
        Ok(out)
    }

    /// The current prompt text.
    pub async fn prompt(&self) -> String {
        self.state.read().await.prompt.clone()
    }

    /// Set the prompt: no words becomes a single space, otherwise each word
    /// followed by one space.
    pub async fn set_prompt(&self, words: &[String]) {
        let mut state = self.state.write().await;
        state.prompt = if words.is_empty() {
            " ".to_string()
        } else {
            words.iter().map(|w| format!("{} ", w)).collect()
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
