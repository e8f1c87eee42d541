//! Generators for on-disk notes trees.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use note::domain::value_objects::ExpansionSet;

/// One generated item: the folder names leading to it, its own name, and
/// whether it is a note (`<name>.md`) or a folder.
pub type Item = (Vec<String>, String, bool);

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => proptest::string::string_regex("[a-d]{1,2}").unwrap(),
        1 => Just("archive".to_string()),
    ]
}

pub fn items() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(
        (
            proptest::collection::vec(segment(), 0..=2),
            segment(),
            any::<bool>(),
        ),
        0..16,
    )
}

/// Write the items under `root`; returns every folder created.
pub fn materialize(root: &Path, items: &[Item]) -> Vec<PathBuf> {
    let mut dirs = BTreeSet::new();
    for (parents, name, is_note) in items {
        let mut dir = root.to_path_buf();
        for parent in parents {
            dir.push(parent);
            dirs.insert(dir.clone());
        }
        std::fs::create_dir_all(&dir).unwrap();
        if *is_note {
            std::fs::write(dir.join(format!("{name}.md")), format!("# {name}\n")).unwrap();
        } else {
            let folder = dir.join(name);
            std::fs::create_dir_all(&folder).unwrap();
            dirs.insert(folder);
        }
    }
    dirs.into_iter().collect()
}

/// Expand the folders whose mask bit is set
pub fn expansion_from_mask(dirs: &[PathBuf], mask: &[bool]) -> ExpansionSet {
    let mut expansion = ExpansionSet::new();
    for (i, dir) in dirs.iter().enumerate() {
        if mask.get(i % mask.len().max(1)).copied().unwrap_or(false) {
            expansion.set(dir.clone(), true);
        }
    }
    expansion
}

pub fn expand_all(dirs: &[PathBuf]) -> ExpansionSet {
    expansion_from_mask(dirs, &[true])
}
