//! Tree node types

use serde::{Deserialize, Serialize};

/// Whether a node is a file leaf or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// One path segment in the selection tree.
///
/// `path` is the slash-joined path from the root to this node and is unique
/// within a tree. Files never carry children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Number of file leaves at or below this node.
    pub fn count_files(&self) -> usize {
        match self.kind {
            NodeKind::File => 1,
            NodeKind::Folder => self.children.iter().map(TreeNode::count_files).sum(),
        }
    }

    /// Number of folders at or below this node, including itself.
    pub fn count_folders(&self) -> usize {
        match self.kind {
            NodeKind::File => 0,
            NodeKind::Folder => 1 + self.children.iter().map(TreeNode::count_folders).sum::<usize>(),
        }
    }

    /// Height of the subtree rooted here (a lone file has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}
