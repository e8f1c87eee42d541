//! Property tests for the tree builder.

use proptest::prelude::*;

use note::domain::services::{build_tree, TreeLayout};
use note::infrastructure::LocalFs;

use crate::strategies::{expansion_from_mask, items, materialize};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Building twice from the same disk state gives the same list.
    #[test]
    fn property_build_is_deterministic(
        items in items(),
        mask in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let expansion = expansion_from_mask(&dirs, &mask);
        let archive = root.join("archive");
        let layout = TreeLayout { root, archive: &archive };

        let first = build_tree(&LocalFs::new(), layout, &expansion).unwrap();
        let second = build_tree(&LocalFs::new(), layout, &expansion).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Every entry sits directly under an expanded folder that
    /// precedes it, and depth never jumps by more than one.
    #[test]
    fn property_entries_nest_under_expanded_parents(
        items in items(),
        mask in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let expansion = expansion_from_mask(&dirs, &mask);
        let archive = root.join("archive");
        let layout = TreeLayout { root, archive: &archive };

        let entries = build_tree(&LocalFs::new(), layout, &expansion).unwrap();

        if let Some(first) = entries.first() {
            prop_assert_eq!(first.depth(), 0);
        }
        for (i, entry) in entries.iter().enumerate() {
            let relative = entry.path().strip_prefix(root).unwrap();
            prop_assert_eq!(entry.depth() + 1, relative.components().count());

            if i > 0 {
                prop_assert!(entry.depth() <= entries[i - 1].depth() + 1);
            }
            if entry.depth() > 0 {
                let parent = entries[..i]
                    .iter()
                    .rev()
                    .find(|e| e.depth() < entry.depth())
                    .unwrap();
                prop_assert!(parent.is_directory());
                prop_assert!(parent.is_expanded());
                prop_assert_eq!(Some(parent.path()), entry.path().parent());
            }
            prop_assert_eq!(entry.is_expanded(), entry.is_directory() && expansion.is_expanded(entry.path()));
        }
    }

    /// PROPERTY: An expanded folder with anything listable in it is
    /// immediately followed by its first child.
    #[test]
    fn property_expanded_folders_list_their_children(
        items in items(),
        mask in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let expansion = expansion_from_mask(&dirs, &mask);
        let archive = root.join("archive");
        let layout = TreeLayout { root, archive: &archive };

        let entries = build_tree(&LocalFs::new(), layout, &expansion).unwrap();

        for (i, entry) in entries.iter().enumerate().filter(|(_, e)| e.is_expanded()) {
            let listable = std::fs::read_dir(entry.path())
                .unwrap()
                .map(|child| child.unwrap().path())
                .any(|child| {
                    if child.is_dir() {
                        child.file_name().is_some_and(|n| n != "archive")
                    } else {
                        child.extension().is_some_and(|e| e == "md")
                    }
                });
            let next_is_child = entries
                .get(i + 1)
                .is_some_and(|next| next.path().parent() == Some(entry.path()));
            prop_assert_eq!(next_is_child, listable, "folder {}", entry.path().display());
        }
    }

    /// PROPERTY: Nothing named "archive" (nor anything below it) is listed.
    #[test]
    fn property_archive_is_never_listed(items in items()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let dirs = materialize(root, &items);
        let expansion = crate::strategies::expand_all(&dirs);
        let archive = root.join("archive");
        let layout = TreeLayout { root, archive: &archive };

        let entries = build_tree(&LocalFs::new(), layout, &expansion).unwrap();
        for entry in &entries {
            let relative = entry.path().strip_prefix(root).unwrap();
            prop_assert!(
                !relative.components().any(|c| c.as_os_str() == "archive"),
                "archive leaked: {}",
                entry.path().display()
            );
            prop_assert!(!entry.path().starts_with(&archive));
        }
    }

    /// PROPERTY: Only `.md` files become notes.
    #[test]
    fn property_notes_are_markdown(items in items()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let todo = root.join("todo.txt");
        std::fs::write(&todo, "not a note").unwrap();
        let dirs = materialize(root, &items);
        let expansion = crate::strategies::expand_all(&dirs);
        let archive = root.join("archive");
        let layout = TreeLayout { root, archive: &archive };

        let entries = build_tree(&LocalFs::new(), layout, &expansion).unwrap();
        for entry in entries.iter().filter(|e| !e.is_directory()) {
            prop_assert_eq!(
                entry.path().extension().and_then(|e| e.to_str()),
                Some("md")
            );
        }
        prop_assert!(entries.iter().all(|e| e.path() != todo.as_path()));
    }
}
