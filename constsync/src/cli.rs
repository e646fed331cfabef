//! Command-line interface definitions for Constsync.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Constsync - export backend enums and model constants to JavaScript
#[derive(Parser, Debug)]
#[command(name = "constsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to constsync.toml configuration file
    #[arg(short, long, global = true, env = "CONSTSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export backend enums to a JavaScript (and optionally TypeScript) file
    Enums(EnumsArgs),

    /// Export model constants to a JavaScript (and optionally TypeScript) file
    Constants(ConstantsArgs),

    /// Initialize a constsync.toml configuration file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EnumsArgs {
    /// Output file path for the JavaScript module (default: resources/js/enums.js)
    pub output: Option<PathBuf>,

    /// Directory under the app root containing enum sources (default: Enums)
    #[arg(long)]
    pub path: Option<String>,

    /// Suffix appended to each exported enum name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Generate a TypeScript definition file in addition to the JS file
    #[arg(long)]
    pub typescript: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConstantsArgs {
    /// Output file path for the JavaScript module (default: resources/js/constants.js)
    pub output: Option<PathBuf>,

    /// Suffix appended to each exported model name (default: Model)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Generate a TypeScript definition file in addition to the JS file
    #[arg(long)]
    pub typescript: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing constsync.toml
    #[arg(short, long)]
    pub force: bool,
}
