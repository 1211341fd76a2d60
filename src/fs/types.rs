//! File System Types
//!
//! Core types for the in-memory file tree.

use std::fmt;

use thiserror::Error;

/// Identity of a node in the tree. Assigned at construction, monotonically
/// increasing from 1, never reused. The root directory is always id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two content kinds a node can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Plain,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Directory => write!(f, "directory"),
            FileKind::Plain => write!(f, "plain file"),
        }
    }
}

/// File system errors. The command layer prefixes these with the command
/// name when reporting, e.g. `cat: f: no such file or directory`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("missing operand")]
    MissingOperand,

    #[error("too many operands")]
    TooManyOperands,

    #[error("{0}: no such file or directory")]
    NotFound(String),

    #[error("{0}: file already exists")]
    AlreadyExists(String),

    /// Operation applied to a content kind that does not support it.
    #[error("is a {0}")]
    WrongKind(FileKind),

    #[error("{0}: not a directory")]
    NotDirectory(String),

    #[error("{0}: is a directory")]
    IsDirectory(String),

    #[error("not supported")]
    NotSupported,
}

/// One line of `ls` output before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: NodeId,
    pub size: usize,
    pub name: String,
    pub is_dir: bool,
}
