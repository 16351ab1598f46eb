//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, EngineConfig};
use crate::engine::Engine;
use crate::error::{Error, Result, ResultExt};
use crate::generator::generators;
use crate::stats::is_enum_candidate;
use crate::types::Dialect;
use serde_json::{json, Map, Value};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                dialect,
                input,
                root_name,
                output,
            } => self.generate(
                *dialect,
                input.as_deref(),
                root_name.as_deref(),
                output.as_deref(),
            ),
            Commands::Schema { input } => self.schema(input.as_deref()),
            Commands::Stats { input } => self.stats(input.as_deref()),
            Commands::Dialects => self.dialects(),
        }
    }

    /// Load the engine configuration
    fn load_config(&self) -> Result<EngineConfig> {
        match &self.cli.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading engine config");
                load_config(path)
            }
            None => Ok(EngineConfig::default()),
        }
    }

    /// Read the input document from a file or stdin
    fn read_input(&self, input: Option<&Path>) -> Result<String> {
        match input {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::file_not_found(path.display().to_string())
                } else {
                    Error::Io(e)
                }
            }),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Render a document in one dialect
    fn generate(
        &self,
        dialect: Dialect,
        input: Option<&Path>,
        root_name: Option<&str>,
        output: Option<&Path>,
    ) -> Result<()> {
        let mut config = self.load_config()?;
        if let Some(name) = root_name {
            config = config.with_root_name(name);
            config.validate()?;
        }

        let text = self.read_input(input)?;
        let start = Instant::now();
        let generation = Engine::new().with_config(config).run(&text, dialect);

        if generation.invalid_input {
            tracing::warn!(dialect = %dialect, "Input is not valid JSON");
        }
        tracing::info!(
            dialect = %dialect,
            output_bytes = generation.text.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Generation complete"
        );

        match output {
            Some(path) => {
                fs::write(path, format!("{}\n", generation.text))
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
                tracing::info!(path = %path.display(), "Output written");
            }
            None => println!("{}", generation.text),
        }

        Ok(())
    }

    /// Print the inferred schema
    fn schema(&self, input: Option<&Path>) -> Result<()> {
        let engine = Engine::new().with_config(self.load_config()?);
        let schema = engine.infer(&self.read_input(input)?)?;

        println!("{}", schema.to_json_pretty());
        Ok(())
    }

    /// Print literal statistics with their enum eligibility
    fn stats(&self, input: Option<&Path>) -> Result<()> {
        let engine = Engine::new().with_config(self.load_config()?);
        let stats = engine.stats(&self.read_input(input)?)?;

        let mut paths = Map::new();
        for (path, values) in stats.iter() {
            paths.insert(
                path.clone(),
                json!({
                    "values": values,
                    "enum_candidate": is_enum_candidate(values.len()),
                }),
            );
        }

        println!(
            "{}",
            serde_json::to_string_pretty(&Value::Object(paths)).unwrap_or_default()
        );
        Ok(())
    }

    /// List available dialects
    fn dialects(&self) -> Result<()> {
        println!("Available dialects:\n");
        for generator in generators() {
            println!(
                "  {:<12} {:<24} .{}",
                generator.dialect().as_str(),
                generator.name(),
                generator.extension()
            );
        }
        Ok(())
    }
}
