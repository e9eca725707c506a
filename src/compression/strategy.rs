//! Compression strategy trait definition

use crate::report::ArchiveReport;

/// Strategy trait for the different compression methods
///
/// Implementations are stateless: the files to compress are passed on every
/// call, so a storage can swap strategies without losing or duplicating data.
pub trait CompressionStrategy: Send + Sync {
    /// Compress the given files and report what was done
    fn compress(&self, files: &[String]) -> ArchiveReport;

    /// Get the display name of this compression method
    fn name(&self) -> &'static str;
}
