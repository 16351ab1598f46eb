//! Common types used throughout typezero
//!
//! Shared type definitions and aliases used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Dialect
// ============================================================================

/// Target dialect for code generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// TypeScript interfaces (typed-interface)
    #[default]
    #[value(alias = "ts", alias = "typed-interface")]
    #[serde(alias = "ts", alias = "typed-interface")]
    Typescript,
    /// Zod schemas (runtime validator)
    #[value(alias = "validator")]
    #[serde(alias = "validator")]
    Zod,
    /// SQL `CREATE TABLE` (relational DDL)
    #[value(alias = "relational-ddl", alias = "ddl")]
    #[serde(alias = "relational-ddl", alias = "ddl")]
    Sql,
    /// Pydantic models (data class)
    #[value(alias = "data-class", alias = "python")]
    #[serde(alias = "data-class", alias = "python")]
    Pydantic,
}

impl Dialect {
    /// All dialects, in display order
    pub const ALL: [Dialect; 4] = [
        Dialect::Typescript,
        Dialect::Zod,
        Dialect::Sql,
        Dialect::Pydantic,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Typescript => "typescript",
            Dialect::Zod => "zod",
            Dialect::Sql => "sql",
            Dialect::Pydantic => "pydantic",
        }
    }

    /// Line-comment prefix of the dialect
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Dialect::Typescript | Dialect::Zod => "//",
            Dialect::Sql => "--",
            Dialect::Pydantic => "#",
        }
    }

    /// The single-line comment returned when the input is not valid JSON
    pub fn invalid_input_comment(&self) -> String {
        format!("{} Invalid JSON", self.comment_prefix())
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "typed-interface" => Ok(Dialect::Typescript),
            "zod" | "validator" => Ok(Dialect::Zod),
            "sql" | "relational-ddl" | "ddl" => Ok(Dialect::Sql),
            "pydantic" | "data-class" | "python" => Ok(Dialect::Pydantic),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
