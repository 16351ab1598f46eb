//! CLI module
//!
//! Command-line interface for the generation engine.
//!
//! # Commands
//!
//! - `generate` - Render a JSON document in one dialect
//! - `schema` - Print the inferred schema
//! - `stats` - Print literal statistics and enum candidates
//! - `dialects` - List available generators

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
