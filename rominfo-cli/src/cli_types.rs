//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rominfo_lib::Platform;

#[derive(Parser)]
#[command(name = "rominfo")]
#[command(about = "Read header metadata from retro game ROMs and disc images", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `info` command.
#[derive(Args, Clone)]
pub(crate) struct InfoArgs {
    /// ROM or disc image files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Console names or aliases to try (e.g., snes,n64,ps1,gg)
    #[arg(short, long, value_delimiter = ',')]
    pub consoles: Option<Vec<Platform>>,

    /// Never fall back to content sniffing
    #[arg(long)]
    pub no_sniff: bool,

    /// Ignore file extensions and dispatch by content only
    #[arg(long)]
    pub buffer: bool,

    /// Number of files parsed in parallel
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show header metadata for ROM files
    Info(InfoArgs),

    /// List all supported formats
    List,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,

    /// Write the default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
