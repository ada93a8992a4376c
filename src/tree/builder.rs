//! Builds a sorted folder/file tree from uploaded file paths.

use crate::tree::node::{NodeKind, TreeNode};
use crate::types::UploadedFile;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Intermediate node keyed by segment name, in first-seen order.
struct PendingNode {
    kind: NodeKind,
    path: String,
    children: IndexMap<String, PendingNode>,
}

/// Build the display tree for a file selection.
///
/// Each file's relative path (or bare name) is split on `/`; every segment but
/// the last becomes a folder, the last a file. Folders sharing a path collapse
/// into one node. Every level is then ordered folders first, then by name.
pub fn build_tree(files: &[UploadedFile]) -> Vec<TreeNode> {
    let mut root: IndexMap<String, PendingNode> = IndexMap::new();

    for file in files {
        let segments = path_segments(file);
        let last = segments.len() - 1;
        let mut level = &mut root;
        let mut path = String::new();

        for (index, segment) in segments.iter().enumerate() {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);

            let kind = if index == last {
                NodeKind::File
            } else {
                NodeKind::Folder
            };
            let node = level
                .entry((*segment).to_string())
                .or_insert_with(|| PendingNode {
                    kind,
                    path: path.clone(),
                    children: IndexMap::new(),
                });
            // A name first seen as a file but later used as a directory prefix
            // becomes a folder; paths stay unique.
            if kind == NodeKind::Folder {
                node.kind = NodeKind::Folder;
            }
            level = &mut node.children;
        }
    }

    finish(root)
}

/// Sibling order: folders before files, then case-insensitive name, then exact name.
pub fn compare_names(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Folder, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Folder) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

fn path_segments(file: &UploadedFile) -> Vec<&str> {
    let segments: Vec<&str> = file
        .relative_path
        .as_deref()
        .map(|p| p.split('/').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    if segments.is_empty() {
        vec![file.name.as_str()]
    } else {
        segments
    }
}

fn finish(level: IndexMap<String, PendingNode>) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = level
        .into_iter()
        .map(|(name, pending)| TreeNode {
            name,
            kind: pending.kind,
            path: pending.path,
            children: finish(pending.children),
        })
        .collect();
    nodes.sort_by(compare_names);
    nodes
}
