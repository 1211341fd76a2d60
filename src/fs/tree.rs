//! Node / Content tree
//!
//! Arena-backed storage for the file tree. Nodes are keyed by integer id and
//! directory entries map names to ids, so the `.` / `..` reference cycles are
//! plain integer lookups with no ownership cycle. The arena owns every node
//! for the session's lifetime; nothing is removed or relocated.

use std::collections::BTreeMap;

use super::types::{FileKind, FsError, ListEntry, NodeId};

/// Directory entry table: entry name to node id, iterated in name order.
pub type DirEntries = BTreeMap<String, NodeId>;

/// The polymorphic payload of a node.
#[derive(Debug, Clone)]
pub enum Content {
    Directory(DirEntries),
    Plain(Vec<String>),
}

/// An identified, content-holding unit of the file tree. The id and kind are
/// fixed at construction; the content is mutable.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    content: Content,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> FileKind {
        match self.content {
            Content::Directory(_) => FileKind::Directory,
            Content::Plain(_) => FileKind::Plain,
        }
    }

    /// Size of this node: entry count for a directory, joined-word length
    /// for a plain file (word lengths plus one separating space per word,
    /// minus one, clamped to zero).
    pub fn size(&self) -> usize {
        match &self.content {
            Content::Directory(entries) => entries.len(),
            Content::Plain(words) => {
                if words.is_empty() {
                    0
                } else {
                    words.iter().map(String::len).sum::<usize>() + words.len() - 1
                }
            }
        }
    }

    /// The live entry table of a directory.
    pub fn entries(&self) -> Result<&DirEntries, FsError> {
        match &self.content {
            Content::Directory(entries) => Ok(entries),
            Content::Plain(_) => Err(FsError::WrongKind(FileKind::Plain)),
        }
    }

    pub fn entries_mut(&mut self) -> Result<&mut DirEntries, FsError> {
        match &mut self.content {
            Content::Directory(entries) => Ok(entries),
            Content::Plain(_) => Err(FsError::WrongKind(FileKind::Plain)),
        }
    }

    /// The words of a plain file.
    pub fn read(&self) -> Result<&[String], FsError> {
        match &self.content {
            Content::Plain(words) => Ok(words),
            Content::Directory(_) => Err(FsError::WrongKind(FileKind::Directory)),
        }
    }

    /// Replace a plain file's content wholesale.
    pub fn write(&mut self, words: Vec<String>) -> Result<(), FsError> {
        match &mut self.content {
            Content::Plain(data) => {
                *data = words;
                Ok(())
            }
            Content::Directory(_) => Err(FsError::WrongKind(FileKind::Directory)),
        }
    }

    /// Membership test on a directory's entry names.
    pub fn file_exists(&self, name: &str) -> Result<bool, FsError> {
        Ok(self.entries()?.contains_key(name))
    }
}

/// Arena of nodes. Ids are indices shifted by one, so id 1 is the root.
#[derive(Debug, Clone)]
pub struct FsTree {
    nodes: Vec<Node>,
}

impl FsTree {
    /// Id of the root directory, created by `new` and never released.
    pub const ROOT: NodeId = NodeId(1);

    /// Create a tree holding only the root directory, with its `.` and `..`
    /// entries both pointing at itself.
    pub fn new() -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let root = tree.alloc(Content::Directory(DirEntries::new()));
        let entries = tree.node_mut(root).entries_mut().unwrap();
        entries.insert(".".to_string(), root);
        entries.insert("..".to_string(), root);
        tree
    }

    fn alloc(&mut self, content: Content) -> NodeId {
        let id = NodeId(self.nodes.len() + 1);
        self.nodes.push(Node { id, content });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 - 1]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 - 1]
    }

    /// Look up a name in a directory.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Result<Option<NodeId>, FsError> {
        Ok(self.node(dir).entries()?.get(name).copied())
    }

    /// Create a directory node under `parent`, seeding its `.` (self) and
    /// `..` (parent) entries. The caller has verified `name` is absent.
    pub fn make_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.node(parent).entries()?;
        let mut entries = DirEntries::new();
        entries.insert("..".to_string(), parent);
        let id = self.alloc(Content::Directory(entries));
        self.node_mut(id)
            .entries_mut()
            .unwrap()
            .insert(".".to_string(), id);
        self.node_mut(parent)
            .entries_mut()
            .unwrap()
            .insert(name.to_string(), id);
        Ok(id)
    }

    /// Create an empty plain-file node under `parent`.
    pub fn make_file(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.node(parent).entries()?;
        let id = self.alloc(Content::Plain(Vec::new()));
        self.node_mut(parent)
            .entries_mut()
            .unwrap()
            .insert(name.to_string(), id);
        Ok(id)
    }

    /// One record per entry of a directory, in lexicographic name order.
    pub fn list(&self, target: NodeId) -> Result<Vec<ListEntry>, FsError> {
        let entries = self.node(target).entries()?;
        Ok(entries
            .iter()
            .map(|(name, &id)| {
                let node = self.node(id);
                ListEntry {
                    id,
                    size: node.size(),
                    name: name.clone(),
                    is_dir: node.kind() == FileKind::Directory,
                }
            })
            .collect())
    }
}

impl Default for FsTree {
    fn default() -> Self {
        Self::new()
    }
}
