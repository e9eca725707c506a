pub mod errors;
pub mod report;
pub mod compression;
pub mod storage;
pub mod config;
pub mod utils;
pub mod commands;
pub mod cli;

pub use errors::{ArchiveError, ArchiveResult};
pub use report::ArchiveReport;
pub use compression::{CompressionFactory, CompressionStrategy, RarCompression, ZipCompression};
pub use storage::{CompressionMethod, FileList, FileStorage, PlainFileStorage};
