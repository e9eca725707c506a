use std::io;
use std::process;
use log::{error, LevelFilter};

use archivekit::cli::build_cli;
use archivekit::commands::{ArchivekitCommandFactory, CommandFactory};
use archivekit::config::ArchiveConfig;
use archivekit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match ArchiveConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration {}: {}", path, e);
                process::exit(1);
            }
        },
        None => ArchiveConfig::default(),
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file = matches.get_one::<String>("log-file")
        .cloned()
        .or_else(|| config.log_file.clone());

    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&path, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let factory = ArchivekitCommandFactory::new();

    match factory.create_command(&matches, &config) {
        Ok(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = command.execute(&mut out) {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
