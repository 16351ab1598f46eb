//! CLI commands and argument parsing

use crate::types::{Dialect, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// typezero CLI
#[derive(Parser, Debug)]
#[command(name = "typezero")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Engine configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (same as `--log-level debug`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimum log level written to stderr
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate source code from a JSON document
    Generate {
        /// Target dialect
        #[arg(short, long, value_enum, default_value_t = Dialect::Typescript)]
        dialect: Dialect,

        /// Input JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Name of the root definition
        #[arg(short, long)]
        root_name: Option<String>,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the inferred schema as JSON
    Schema {
        /// Input JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print literal statistics per field path
    Stats {
        /// Input JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List available dialects
    Dialects,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}
