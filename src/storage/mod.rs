//! File storage clients
//!
//! Two designs of the same feature: `FileStorage` delegates archiving to an
//! injected `CompressionStrategy`, while `PlainFileStorage` branches on a
//! closed `CompressionMethod` tag.

#[cfg(test)]
mod tests;
mod file_list;
mod file_storage;
pub mod plain;

pub use file_list::FileList;
pub use file_storage::FileStorage;
pub use plain::{CompressionMethod, PlainFileStorage};
