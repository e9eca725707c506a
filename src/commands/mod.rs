//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod archive_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use archive_command::ArchiveCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::config::ArchiveConfig;
use crate::errors::ArchiveResult;

/// Factory for creating command instances based on CLI arguments
pub struct ArchivekitCommandFactory;

impl ArchivekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ArchivekitCommandFactory
    }
}

impl Default for ArchivekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for ArchivekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &ArchiveConfig) -> ArchiveResult<Box<dyn Command>> {
        if args.get_flag("list-methods") {
            Ok(Box::new(ListCommand))
        } else {
            Ok(Box::new(ArchiveCommand::new(args, config)?))
        }
    }
}
