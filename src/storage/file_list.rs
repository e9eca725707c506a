//! Ordered collection of file names awaiting archiving

use crate::errors::{ArchiveError, ArchiveResult};

/// File names in insertion order; duplicates are kept
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Vec<String>,
}

impl FileList {
    pub fn new() -> Self {
        FileList { files: Vec::new() }
    }

    /// Append a file name to the end of the list
    ///
    /// # Arguments
    /// * `file` - File name; must contain at least one non-whitespace character
    ///
    /// # Returns
    /// `InvalidArgument` if the name is empty
    pub fn add(&mut self, file: impl Into<String>) -> ArchiveResult<()> {
        let file = file.into();
        if file.trim().is_empty() {
            return Err(ArchiveError::InvalidArgument("file name must not be empty".to_string()));
        }
        self.files.push(file);
        Ok(())
    }

    /// Number of files collected so far
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The files in insertion order
    pub fn files(&self) -> &[String] {
        &self.files
    }
}
