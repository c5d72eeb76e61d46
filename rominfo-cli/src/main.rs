//! rominfo CLI
//!
//! Command-line interface for reading header metadata from retro game ROMs
//! and disc images.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use rominfo_lib::{OutputFormat, Settings, SettingsError, default_registry};

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_init, run_config_path, run_config_show};
use commands::info::run_info;
use commands::list::run_list;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    let settings = Settings::load();

    // Keep stdout clean for JSON
    let json_output = match (&cli.command, &settings) {
        (Commands::Info(args), Ok(s)) => args.json || s.output.format == OutputFormat::Json,
        (Commands::Info(args), Err(_)) => args.json,
        _ => false,
    };
    init_logger(cli.quiet, cli.verbose, json_output);

    match run(cli, settings) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a subcommand. `Ok(false)` means some input could not be read.
fn run(cli: Cli, settings: Result<Settings, SettingsError>) -> Result<bool, CliError> {
    match cli.command {
        Commands::Info(args) => run_info(args, &settings?, cli.quiet),
        Commands::List => {
            run_list(&default_registry());
            Ok(true)
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Path => run_config_path(),
                ConfigAction::Show => run_config_show()?,
                ConfigAction::Init { force } => run_config_init(force)?,
            }
            Ok(true)
        }
    }
}

/// Install env_logger. `RUST_LOG` overrides the level picked by the flags.
fn init_logger(quiet: bool, verbose: bool, json_output: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder.target(if json_output {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    });

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.to_string().to_lowercase(),
                record.args()
            ),
        });
    }

    builder.init();
}
