//! Property tests for cursor anchoring across rebuilds.

use proptest::prelude::*;

use note::infrastructure::LocalFs;
use note::{NoteTree, Step};

use crate::strategies::{expand_all, items, materialize};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any rebuild the cursor is `None` exactly when the
    /// tree is empty, and otherwise indexes a visible entry.
    #[test]
    fn property_cursor_stays_in_bounds(
        items in items(),
        moves in 0usize..24,
        removals in proptest::collection::vec(any::<bool>(), 0..16)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let fs = LocalFs::new();
        let mut tree = NoteTree::open_with(&fs, root, root.join("archive"), expand_all(&dirs)).unwrap();

        for _ in 0..moves {
            tree.move_cursor(Step::Down);
        }

        // Remove some top-level entries behind the tree's back
        let top_level: Vec<_> = tree
            .entries()
            .iter()
            .filter(|e| e.depth() == 0)
            .map(|e| (e.path().to_path_buf(), e.is_directory()))
            .collect();
        for ((path, is_dir), remove) in top_level.iter().zip(&removals) {
            if *remove {
                if *is_dir {
                    std::fs::remove_dir_all(path).unwrap();
                } else {
                    std::fs::remove_file(path).unwrap();
                }
            }
        }

        let before = tree.cursor();
        let anchor = tree.selected().map(|e| e.path().to_path_buf());
        tree.rebuild(&fs, None).unwrap();

        match tree.cursor() {
            None => prop_assert!(tree.is_empty()),
            Some(index) => {
                prop_assert!(index < tree.len());
                match anchor.as_deref().and_then(|p| tree.index_of(p)) {
                    Some(kept) => prop_assert_eq!(index, kept),
                    None => prop_assert_eq!(index, before.unwrap_or(0).min(tree.len() - 1)),
                }
            }
        }
    }

    /// PROPERTY: Moving never leaves the list and never wraps.
    #[test]
    fn property_moves_never_wrap(
        items in items(),
        steps in proptest::collection::vec(any::<bool>(), 0..32)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let fs = LocalFs::new();
        let mut tree = NoteTree::open_with(&fs, root, root.join("archive"), expand_all(&dirs)).unwrap();

        for down in steps {
            let before = tree.cursor();
            let step = if down { Step::Down } else { Step::Up };
            let moved = tree.move_cursor(step);
            match (before, tree.cursor()) {
                (None, after) => prop_assert_eq!(after, None),
                (Some(b), Some(a)) => {
                    prop_assert!(a < tree.len());
                    if moved {
                        prop_assert_eq!(a, if down { b + 1 } else { b - 1 });
                    } else {
                        prop_assert_eq!(a, b);
                        let at_edge = if down { b + 1 == tree.len() } else { b == 0 };
                        prop_assert!(at_edge, "stopped away from the edge at {}", b);
                    }
                }
                (Some(_), None) => prop_assert!(false, "cursor lost without a rebuild"),
            }
        }
    }
}
