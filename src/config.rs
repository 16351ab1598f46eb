//! Engine configuration
//!
//! Every field has a default, so an empty YAML document (or no config file at
//! all) yields the stock behavior. Config files may be YAML or JSON.

use crate::error::{Error, Result};
use crate::schema::{SchemaInferrer, DEFAULT_MAX_DEPTH, DEFAULT_SAMPLE_LIMIT};
use crate::stats::{StatsCollector, DEFAULT_ARRAY_SAMPLE, DEFAULT_BUDGET, DEFAULT_STATS_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted `max_depth` for inference and statistics
pub const MAX_DEPTH_LIMIT: usize = 100;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name of the root definition
    pub root_name: String,

    /// Schema inference settings
    pub inference: InferenceConfig,

    /// Literal statistics settings
    pub stats: StatsConfig,

    /// TypeScript dialect options
    pub typescript: TypeScriptOptions,

    /// SQL dialect options
    pub sql: SqlOptions,

    /// Pydantic dialect options
    pub pydantic: PydanticOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            inference: InferenceConfig::default(),
            stats: StatsConfig::default(),
            typescript: TypeScriptOptions::default(),
            sql: SqlOptions::default(),
            pydantic: PydanticOptions::default(),
        }
    }
}

fn default_root_name() -> String {
    "Root".to_string()
}

impl EngineConfig {
    /// Override the root definition name
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Build the schema inferrer described by this config
    pub fn inferrer(&self) -> SchemaInferrer {
        SchemaInferrer::new()
            .with_sample_limit(self.inference.sample_limit)
            .with_max_depth(self.inference.max_depth)
    }

    /// Build the statistics collector described by this config
    pub fn collector(&self) -> StatsCollector {
        StatsCollector::new()
            .with_budget(self.stats.budget)
            .with_array_sample(self.stats.array_sample)
            .with_max_depth(self.stats.max_depth)
    }

    /// Container depth the parser keeps before pruning
    ///
    /// One level past the deepest cap, so capped subtrees still read as
    /// containers rather than `null`.
    pub fn parse_depth(&self) -> usize {
        self.inference.max_depth.max(self.stats.max_depth) + 1
    }

    /// Reject settings that would make generation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.root_name.trim().is_empty() {
            return Err(Error::config("root_name cannot be empty"));
        }

        if self.inference.sample_limit == 0 {
            return Err(Error::config("inference.sample_limit must be at least 1"));
        }

        if self.inference.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::config(format!(
                "inference.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        if self.stats.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::config(format!(
                "stats.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        if self.stats.enabled && self.stats.budget == 0 {
            return Err(Error::config("stats.budget must be at least 1"));
        }

        if let Some(table) = &self.sql.table_name {
            if table.trim().is_empty() {
                return Err(Error::config("sql.table_name cannot be empty"));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Inference & Statistics
// ============================================================================

/// Schema inference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Leading array elements sampled per array
    pub sample_limit: usize,

    /// Nesting depth before a value collapses to `any`
    pub max_depth: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Literal statistics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Detect enum-like fields at all
    pub enabled: bool,

    /// Total visits allowed per document
    pub budget: usize,

    /// Leading array elements descended into
    pub array_sample: usize,

    /// Nesting depth before collection stops descending
    pub max_depth: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            budget: DEFAULT_BUDGET,
            array_sample: DEFAULT_ARRAY_SAMPLE,
            max_depth: DEFAULT_STATS_MAX_DEPTH,
        }
    }
}

// ============================================================================
// Dialect Options
// ============================================================================

/// TypeScript dialect options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeScriptOptions {
    /// Render arrays as `readonly T[]`
    pub readonly_arrays: bool,
}

/// SQL dialect options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlOptions {
    /// Table name; defaults to the snake_case root name
    pub table_name: Option<String>,
}

/// Pydantic dialect options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PydanticOptions {
    /// Wrap fields missing from some samples in `Optional[...] = None`
    pub optional_fields: bool,
}

// ============================================================================
// Loading
// ============================================================================

/// Load an engine config from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    } else {
        load_config_from_str(&content)
    }
}

/// Load an engine config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<EngineConfig> {
    if yaml.trim().is_empty() {
        return Ok(EngineConfig::default());
    }

    let config: EngineConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
