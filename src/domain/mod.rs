//! Domain Layer
//!
//! The note tree model: what an entry is, how the visible tree is derived
//! from the disk, and the ports through which that happens.
//!
//! ## Structure
//!
//! - `entities/` - Entry (directory or note)
//! - `value_objects/` - ExpansionSet, EntryName, naming conventions
//! - `services/` - Tree builder, title resolver
//! - `ports/` - FileSystem, MarkdownRenderer, Clock

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
