//! Result of a single archive run

use std::fmt;

/// What was archived and with which method
///
/// Rendered through `Display` as the one-line summary printed by the CLI,
/// e.g. `Compressing 2 files using ZIP.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Number of files handed to the strategy
    pub file_count: usize,
    /// Display name of the compression method
    pub method: String,
}

impl ArchiveReport {
    pub fn new(file_count: usize, method: impl Into<String>) -> Self {
        ArchiveReport {
            file_count,
            method: method.into(),
        }
    }
}

impl fmt::Display for ArchiveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compressing {} files using {}.", self.file_count, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line() {
        let report = ArchiveReport::new(2, "ZIP");
        assert_eq!(report.to_string(), "Compressing 2 files using ZIP.");
    }

    #[test]
    fn test_empty_report_line() {
        let report = ArchiveReport::new(0, "RAR");
        assert_eq!(report.to_string(), "Compressing 0 files using RAR.");
    }
}
