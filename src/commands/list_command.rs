//! Lists the compression methods that can be selected by name

use std::io::Write;

use crate::commands::command_traits::Command;
use crate::compression::CompressionFactory;
use crate::errors::ArchiveResult;

/// Command for listing available compression methods
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> ArchiveResult<()> {
        for (method, strategy) in CompressionFactory::get_available_methods() {
            writeln!(out, "{:<6} {}", strategy.name(), method.aliases.join(", "))?;
        }
        Ok(())
    }
}
