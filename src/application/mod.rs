//! Application Layer
//!
//! Orchestrates the domain services against a `FileSystem` port.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT touch the terminal
//! - Owns the only mutable note-tree state (snapshot, cursor, expansion)
//!
//! ## Components
//!
//! - `NoteTree` - navigation and selection over the flattened tree
//! - mutations on `NoteTree` - create note, create folder, archive, rename

mod mutations;
pub mod navigator;

pub use navigator::{NoteTree, Step};
