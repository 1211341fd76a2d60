//! File System Module
//!
//! In-memory file tree and the session that drives it:
//! - tree: arena-backed node storage (directories and plain files)
//! - session: current directory, absolute path state, prompt

pub mod session;
pub mod tree;
pub mod types;

pub use session::Session;
pub use tree::{Content, DirEntries, FsTree, Node};
pub use types::{FileKind, FsError, ListEntry, NodeId};
