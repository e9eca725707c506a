//! Archive command
//!
//! Collects the given files into a storage, archives them, and optionally
//! archives again after switching the compression method.

use std::io::Write;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::compression::CompressionFactory;
use crate::config::ArchiveConfig;
use crate::errors::ArchiveResult;
use crate::report::ArchiveReport;
use crate::storage::{CompressionMethod, FileStorage, PlainFileStorage};

/// Command for archiving a list of files
pub struct ArchiveCommand {
    /// Files to archive, in command-line order
    files: Vec<String>,
    /// Initial compression method name
    method: String,
    /// Method to switch to before the second run
    switch_to: Option<String>,
    /// Use `PlainFileStorage` instead of `FileStorage`
    plain: bool,
}

impl ArchiveCommand {
    /// Create a new archive command
    ///
    /// Method names are resolved up front so a typo fails before any
    /// archiving happens.
    pub fn new(args: &ArgMatches, config: &ArchiveConfig) -> ArchiveResult<Self> {
        let files = args.get_many::<String>("files")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let method = args.get_one::<String>("method")
            .cloned()
            .unwrap_or_else(|| config.default_method.clone());
        let switch_to = args.get_one::<String>("switch-to").cloned();
        let plain = args.get_flag("plain");

        // Validate method names
        for name in std::iter::once(&method).chain(switch_to.iter()) {
            if plain {
                name.parse::<CompressionMethod>()?;
            } else {
                CompressionFactory::get_strategy_by_name(name)?;
            }
        }
        info!("Using compression: {}", method);

        Ok(ArchiveCommand {
            files,
            method,
            switch_to,
            plain,
        })
    }

    /// Run the archive with the strategy-injected storage
    fn run_strategy(&self) -> ArchiveResult<Vec<ArchiveReport>> {
        let mut storage = FileStorage::with_method_name(&self.method)?;
        for file in &self.files {
            storage.add_file(file.as_str())?;
        }

        let mut reports = vec![storage.archive()];
        if let Some(name) = &self.switch_to {
            storage.set_compression_strategy(CompressionFactory::get_strategy_by_name(name)?);
            reports.push(storage.archive());
        }
        Ok(reports)
    }

    /// Run the archive with the hardcoded-choice storage
    fn run_plain(&self) -> ArchiveResult<Vec<ArchiveReport>> {
        let mut storage = PlainFileStorage::new(self.method.parse()?);
        for file in &self.files {
            storage.add_file(file.as_str())?;
        }

        let mut reports = vec![storage.archive()];
        if let Some(name) = &self.switch_to {
            storage.set_compression_method(name.parse()?);
            reports.push(storage.archive());
        }
        Ok(reports)
    }
}

impl Command for ArchiveCommand {
    fn execute(&self, out: &mut dyn Write) -> ArchiveResult<()> {
        info!("Archiving {} files (plain: {})", self.files.len(), self.plain);

        let reports = if self.plain {
            self.run_plain()?
        } else {
            self.run_strategy()?
        };

        for report in reports {
            writeln!(out, "{}", report)?;
        }
        Ok(())
    }
}
