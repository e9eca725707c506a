//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `archivekit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("archivekit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Archive a list of files with a runtime-selectable compression method")
        .arg(
            Arg::new("files")
                .help("Files to archive")
                .value_name("FILE")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("method")
                .short('m')
                .long("method")
                .help("Compression method name or alias (zip, rar, ...)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("switch-to")
                .short('s')
                .long("switch-to")
                .help("Archive a second time after switching to this method")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Use the storage that hardcodes its compression choice")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-methods")
                .short('l')
                .long("list-methods")
                .help("List available compression methods")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
