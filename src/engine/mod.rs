//! Generation engine module
//!
//! The boundary between raw JSON text and generated source.
//!
//! # Overview
//!
//! Every call parses the input, infers a [`Schema`], optionally collects
//! [`LiteralStats`], and renders the requested dialect. Nothing is cached
//! between calls.
//!
//! Two entry points are offered:
//! - [`try_generate`] returns a `Result`, surfacing malformed input as
//!   [`crate::Error::InvalidJson`]
//! - [`generate`] / [`generate_with`] never fail; errors become the dialect's
//!   single-line invalid-JSON comment

mod parse;
mod types;

pub use parse::parse_document;
pub use types::Generation;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::generator::generator_for;
use crate::schema::Schema;
use crate::stats::LiteralStats;
use crate::types::{Dialect, JsonValue};

/// Stateless generation engine bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set engine configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse JSON text
    ///
    /// Containers nested below every configured depth cap are pruned to `null`,
    /// so arbitrarily deep documents parse without hitting a recursion limit.
    pub fn parse(&self, text: &str) -> Result<JsonValue> {
        parse_document(text, self.config.parse_depth())
    }

    /// Infer the schema of a JSON document
    pub fn infer(&self, text: &str) -> Result<Schema> {
        let value = self.parse(text)?;
        Ok(self.config.inferrer().infer(&value))
    }

    /// Collect literal statistics of a JSON document
    pub fn stats(&self, text: &str) -> Result<LiteralStats> {
        let value = self.parse(text)?;
        Ok(self.config.collector().collect(&value))
    }

    /// Generate source for a dialect, surfacing errors
    pub fn try_generate(&self, text: &str, dialect: Dialect) -> Result<String> {
        let value = self.parse(text)?;
        let generator = generator_for(dialect, &self.config);

        let schema = self.config.inferrer().infer(&value);
        let stats = (self.config.stats.enabled && generator.uses_stats())
            .then(|| self.config.collector().collect(&value));

        tracing::debug!(
            dialect = %dialect,
            input_bytes = text.len(),
            stats_paths = stats.as_ref().map_or(0, LiteralStats::len),
            "rendering schema"
        );

        Ok(generator.render(&schema, stats.as_ref(), &self.config.root_name))
    }

    /// Generate source for a dialect; never fails
    pub fn run(&self, text: &str, dialect: Dialect) -> Generation {
        match self.try_generate(text, dialect) {
            Ok(output) => Generation::ok(dialect, output),
            Err(e) => {
                tracing::debug!(dialect = %dialect, error = %e, "generation failed");
                Generation::invalid(dialect)
            }
        }
    }
}

/// Generate source with the given configuration, surfacing errors
pub fn try_generate(text: &str, dialect: Dialect, config: &EngineConfig) -> Result<String> {
    Engine::new().with_config(config.clone()).try_generate(text, dialect)
}

/// Generate source with default configuration
///
/// Malformed input yields the dialect's invalid-JSON comment.
pub fn generate(text: &str, dialect: Dialect) -> String {
    Engine::new().run(text, dialect).text
}

/// Generate source with the given configuration; never fails
pub fn generate_with(text: &str, dialect: Dialect, config: &EngineConfig) -> String {
    Engine::new().with_config(config.clone()).run(text, dialect).text
}

/// Infer the schema of a JSON document
pub fn infer_document(text: &str, config: &EngineConfig) -> Result<Schema> {
    Engine::new().with_config(config.clone()).infer(text)
}

/// Collect literal statistics of a JSON document
pub fn collect_document_stats(text: &str, config: &EngineConfig) -> Result<LiteralStats> {
    Engine::new().with_config(config.clone()).stats(text)
}

#[cfg(test)]
mod tests;
