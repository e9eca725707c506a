//! RAR compression strategy

use log::info;
use crate::report::ArchiveReport;
use super::strategy::CompressionStrategy;

/// RAR compression strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct RarCompression;

impl RarCompression {
    /// Name used in reports and method listings
    pub const NAME: &'static str = "RAR";
}

impl CompressionStrategy for RarCompression {
    fn compress(&self, files: &[String]) -> ArchiveReport {
        let report = ArchiveReport::new(files.len(), self.name());
        info!("{}", report);
        report
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
