//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use std::io::Write;
use crate::config::ArchiveConfig;
use crate::errors::ArchiveResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command, writing user-facing output to `out`
    fn execute(&self, out: &mut dyn Write) -> ArchiveResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, config: &ArchiveConfig) -> ArchiveResult<Box<dyn Command>>;
}
