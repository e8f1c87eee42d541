//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entry_name;
mod expansion;
pub mod naming;

pub use entry_name::EntryName;
pub use expansion::ExpansionSet;
