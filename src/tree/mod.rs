//! Directory tree reconstruction from a flat file selection.

pub mod builder;
pub mod node;

pub use builder::{build_tree, compare_names};
pub use node::{NodeKind, TreeNode};
