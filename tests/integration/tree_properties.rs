use hwgrade::tree::compare_names;
use hwgrade::{build_tree, get_file_stats, NodeKind, TreeNode, UploadedFile};
use proptest::prelude::*;
use std::cmp::Ordering;

const EXTENSIONS: &[&str] = &["pdf", "docx", "png", "sh", "c", "zip", ""];

fn file_at(segments: &[String], ext: &str) -> UploadedFile {
    let mut path = segments.join("/");
    if !ext.is_empty() {
        path.push('.');
        path.push_str(ext);
    }
    let name = path.rsplit('/').next().unwrap_or(&path).to_string();
    UploadedFile::new(name, 1).with_relative_path(path)
}

fn selection_strategy() -> impl Strategy<Value = Vec<UploadedFile>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-cA-C]{1,2}", 1..4),
            prop::sample::select(EXTENSIONS),
        ),
        0..24,
    )
    .prop_map(|entries| {
        entries
            .iter()
            .map(|(segments, ext)| file_at(segments, ext))
            .collect()
    })
}

fn plain_strategy() -> impl Strategy<Value = Vec<UploadedFile>> {
    prop::collection::vec(("[a-z]{1,6}", prop::sample::select(EXTENSIONS)), 0..16).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(stem, ext)| {
                    let name = if ext.is_empty() {
                        stem
                    } else {
                        format!("{}.{}", stem, ext)
                    };
                    UploadedFile::new(name, 1)
                })
                .collect()
        },
    )
}

fn collect_paths(nodes: &[TreeNode], out: &mut Vec<String>) {
    for node in nodes {
        out.push(node.path.clone());
        collect_paths(&node.children, out);
    }
}

fn check_level(nodes: &[TreeNode], parent: Option<&str>) -> Result<(), TestCaseError> {
    for pair in nodes.windows(2) {
        prop_assert_ne!(compare_names(&pair[0], &pair[1]), Ordering::Greater);
    }
    for node in nodes {
        let expected = match parent {
            Some(parent) => format!("{}/{}", parent, node.name),
            None => node.name.clone(),
        };
        prop_assert_eq!(&node.path, &expected);
        if node.kind == NodeKind::File {
            prop_assert!(node.children.is_empty());
        }
        check_level(&node.children, Some(&node.path))?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn stats_total_matches_input(files in selection_strategy()) {
        let stats = get_file_stats(&files);
        prop_assert_eq!(stats.total, files.len());
        prop_assert_eq!(stats.category_sum(), stats.total);
    }

    #[test]
    fn build_is_idempotent(files in selection_strategy()) {
        prop_assert_eq!(build_tree(&files), build_tree(&files));
    }

    #[test]
    fn build_ignores_insertion_order(files in selection_strategy()) {
        let mut reversed = files.clone();
        reversed.reverse();
        prop_assert_eq!(build_tree(&files), build_tree(&reversed));
    }

    #[test]
    fn levels_are_sorted_and_paths_nest(files in selection_strategy()) {
        check_level(&build_tree(&files), None)?;
    }

    #[test]
    fn paths_are_unique_and_cover_every_file(files in selection_strategy()) {
        let tree = build_tree(&files);
        let mut paths = Vec::new();
        collect_paths(&tree, &mut paths);

        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), paths.len());

        for file in &files {
            prop_assert!(paths.iter().any(|p| p == file.display_path()));
        }
    }

    #[test]
    fn plain_selection_is_flat(files in plain_strategy()) {
        let tree = build_tree(&files);
        prop_assert!(tree.iter().all(|n| n.kind == NodeKind::File && n.children.is_empty()));
    }
}

#[test]
fn folder_sorts_before_file_regardless_of_name() {
    let files = vec![
        UploadedFile::new("a", 1).with_relative_path("a"),
        UploadedFile::new("z.txt", 1).with_relative_path("b/z.txt"),
    ];
    let tree = build_tree(&files);
    assert_eq!(tree[0].name, "b");
    assert_eq!(tree[0].kind, NodeKind::Folder);
    assert_eq!(tree[1].name, "a");
}
