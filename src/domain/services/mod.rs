//! Domain Services
//!
//! Stateless functions over the filesystem port.

pub mod title;
pub mod tree_builder;

pub use title::resolve_title;
pub use tree_builder::{build_tree, TreeLayout};
