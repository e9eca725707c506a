//! Strategy-injected file storage

use log::debug;
use crate::compression::{CompressionFactory, CompressionStrategy};
use crate::errors::ArchiveResult;
use crate::report::ArchiveReport;
use super::file_list::FileList;

/// Client-facing storage that archives its files with a pluggable strategy
///
/// The storage holds exactly one strategy at a time and never inspects which
/// concrete type it is; `archive` is pure delegation.
pub struct FileStorage {
    files: FileList,
    strategy: Box<dyn CompressionStrategy>,
}

impl FileStorage {
    /// Create an empty storage with the given initial strategy
    pub fn new(strategy: Box<dyn CompressionStrategy>) -> Self {
        debug!("Creating file storage with {} compression", strategy.name());
        FileStorage {
            files: FileList::new(),
            strategy,
        }
    }

    /// Create an empty storage, resolving the strategy by name or alias
    ///
    /// # Arguments
    /// * `name` - Compression method name (e.g. "zip", "rar")
    ///
    /// # Returns
    /// A new storage or `UnknownCompression` if nothing matches the name
    pub fn with_method_name(name: &str) -> ArchiveResult<Self> {
        Ok(Self::new(CompressionFactory::get_strategy_by_name(name)?))
    }

    /// Add a file to be archived
    pub fn add_file(&mut self, file: impl Into<String>) -> ArchiveResult<()> {
        let file = file.into();
        self.files.add(file.as_str())?;
        debug!("Added file '{}'", file);
        Ok(())
    }

    /// Change the compression strategy at runtime
    pub fn set_compression_strategy(&mut self, strategy: Box<dyn CompressionStrategy>) {
        debug!("Switching compression from {} to {}", self.strategy.name(), strategy.name());
        self.strategy = strategy;
    }

    /// Archive all files with the currently set strategy
    pub fn archive(&self) -> ArchiveReport {
        self.strategy.compress(self.files.files())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &[String] {
        self.files.files()
    }

    /// Display name of the active strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}
