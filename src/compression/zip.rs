//! ZIP compression strategy

use log::info;
use crate::report::ArchiveReport;
use super::strategy::CompressionStrategy;

/// ZIP compression strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipCompression;

impl ZipCompression {
    /// Name used in reports and method listings
    pub const NAME: &'static str = "ZIP";
}

impl CompressionStrategy for ZipCompression {
    fn compress(&self, files: &[String]) -> ArchiveReport {
        let report = ArchiveReport::new(files.len(), self.name());
        info!("{}", report);
        report
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
