//! memshell - an in-memory file system shell
//!
//! A tree of numbered nodes (directories and plain word files) driven by a
//! small set of shell-style commands: cat, cd, ls, make, mkdir, prompt, pwd.

pub mod commands;
pub mod fs;
pub mod shell;

pub use fs::{FileKind, FsError, FsTree, NodeId, Session};
pub use shell::{ExecResult, Shell};
