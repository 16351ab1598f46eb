//! Engine types

use crate::types::Dialect;
use serde::{Deserialize, Serialize};

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// Dialect that was requested
    pub dialect: Dialect,

    /// Generated source, or the dialect's invalid-input comment
    pub text: String,

    /// Set when `text` is the invalid-input comment
    pub invalid_input: bool,
}

impl Generation {
    /// Successful generation
    pub fn ok(dialect: Dialect, text: String) -> Self {
        Self {
            dialect,
            text,
            invalid_input: false,
        }
    }

    /// Sentinel output for input that failed to parse
    pub fn invalid(dialect: Dialect) -> Self {
        Self {
            dialect,
            text: dialect.invalid_input_comment(),
            invalid_input: true,
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
