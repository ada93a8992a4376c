//! Directory tree rendering.
//!
//! Expansion is decided here, per render: folders shallower than
//! `expand_depth` are open, deeper ones collapse to a one-line count.

use crate::report::style::Palette;
use crate::summary::classify;
use crate::tree::TreeNode;

/// Heading shown above the tree.
pub const TREE_ROOT_LABEL: &str = "~/homework";

/// Render the tree with box-drawing guides. Empty input renders nothing.
pub fn format_tree(nodes: &[TreeNode], expand_depth: usize, palette: &Palette) -> String {
    if nodes.is_empty() {
        return String::new();
    }
    let mut out = format!("{}\n", palette.muted(TREE_ROOT_LABEL));
    let mut guides = Vec::new();
    render_level(nodes, 0, expand_depth, palette, &mut guides, &mut out);
    out
}

fn render_level(
    nodes: &[TreeNode],
    depth: usize,
    expand_depth: usize,
    palette: &Palette,
    guides: &mut Vec<bool>,
    out: &mut String,
) {
    for (index, node) in nodes.iter().enumerate() {
        let last = index + 1 == nodes.len();
        for open in guides.iter() {
            out.push_str(if *open { "│   " } else { "    " });
        }
        out.push_str(if last { "└── " } else { "├── " });

        if node.is_folder() {
            let expanded = depth < expand_depth;
            if expanded {
                out.push_str(&format!("▾ {}\n", palette.folder(&format!("{}/", node.name))));
                guides.push(!last);
                render_level(&node.children, depth + 1, expand_depth, palette, guides, out);
                guides.pop();
            } else {
                let files = node.count_files();
                out.push_str(&format!(
                    "▸ {} {}\n",
                    palette.folder(&format!("{}/", node.name)),
                    palette.muted(&format!(
                        "({} file{})",
                        files,
                        if files == 1 { "" } else { "s" }
                    ))
                ));
            }
        } else {
            out.push_str(&format!("  {}\n", palette.category(&node.name, classify(&node.name))));
        }
    }
}
