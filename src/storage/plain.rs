//! File storage with a hardcoded compression choice
//!
//! Kept alongside `FileStorage` for comparison: every new method here means
//! a new enum variant and a new match arm in `archive`.

use std::fmt;
use std::str::FromStr;
use log::{debug, info};
use crate::compression::methods::resolve_method;
use crate::compression::{RarCompression, ZipCompression};
use crate::errors::{ArchiveError, ArchiveResult};
use crate::report::ArchiveReport;
use super::file_list::FileList;

/// Closed set of compression methods known to `PlainFileStorage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Zip,
    Rar,
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionMethod::Zip => write!(f, "zip"),
            CompressionMethod::Rar => write!(f, "rar"),
        }
    }
}

impl FromStr for CompressionMethod {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let definition = resolve_method(s)
            .ok_or_else(|| ArchiveError::UnknownCompression(s.to_string()))?;
        match definition.key.as_str() {
            "zip" => Ok(CompressionMethod::Zip),
            "rar" => Ok(CompressionMethod::Rar),
            _ => Err(ArchiveError::UnknownCompression(s.to_string())),
        }
    }
}

/// Storage that decides how to compress by matching on a method tag
pub struct PlainFileStorage {
    files: FileList,
    method: CompressionMethod,
}

impl PlainFileStorage {
    pub fn new(method: CompressionMethod) -> Self {
        PlainFileStorage {
            files: FileList::new(),
            method,
        }
    }

    pub fn add_file(&mut self, file: impl Into<String>) -> ArchiveResult<()> {
        self.files.add(file)
    }

    /// Change the compression method at runtime
    pub fn set_compression_method(&mut self, method: CompressionMethod) {
        debug!("Switching compression method from {} to {}", self.method, method);
        self.method = method;
    }

    /// Archive all files; this type has to know every method it supports
    pub fn archive(&self) -> ArchiveReport {
        let report = match self.method {
            CompressionMethod::Zip => ArchiveReport::new(self.files.len(), ZipCompression::NAME),
            CompressionMethod::Rar => ArchiveReport::new(self.files.len(), RarCompression::NAME),
        };
        info!("{}", report);
        report
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn method(&self) -> CompressionMethod {
        self.method
    }
}
