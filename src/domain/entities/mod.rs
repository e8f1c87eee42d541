//! Domain Entities

mod entry;

pub use entry::Entry;
