//! # typezero
//!
//! Infer a structural schema from any JSON document and render it as
//! TypeScript interfaces, Zod validators, a SQL table definition or Pydantic
//! models.
//!
//! ## Features
//!
//! - **Schema Inference**: Recursive shape inference with array sampling and shape merging
//! - **Optional Detection**: Keys missing from some array elements become optional
//! - **Deduplication**: Structurally identical objects share one named definition
//! - **Enum Detection**: Fields with 2 to 8 distinct literal values render as literal unions
//! - **Never Throws**: Malformed input renders as a dialect-specific comment
//!
//! ## Quick Start
//!
//! ```rust
//! use typezero::{generate, Dialect};
//!
//! let ts = generate(r#"{"id": 1, "meta": {"active": true}}"#, Dialect::Typescript);
//! assert!(ts.contains("export interface Meta"));
//!
//! assert_eq!(generate("{not json", Dialect::Sql), "-- Invalid JSON");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │         generate(text, dialect) → String   (engine)          │
//! └──────────────────────────────────────────────────────────────┘
//!                  │                            │
//!        ┌─────────┴─────────┐        ┌─────────┴─────────┐
//!        │  schema           │        │  stats            │
//!        │  infer / merge    │        │  literal values   │
//!        │  signature        │        │  per field path   │
//!        └─────────┬─────────┘        └─────────┬─────────┘
//!                  └─────────────┬──────────────┘
//! ┌────────────┬─────────────────┴──┬────────────┬──────────────┐
//! │ TypeScript │ Zod                │ SQL        │ Pydantic     │
//! └────────────┴────────────────────┴────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Engine configuration
pub mod config;

/// Schema model, inference and signatures
pub mod schema;

/// Literal value statistics
pub mod stats;

/// Dialect generators
pub mod generator;

/// Generation boundary
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, EngineConfig};
pub use engine::{
    collect_document_stats, generate, generate_with, infer_document, try_generate, Engine,
    Generation,
};
pub use error::{Error, Result};
pub use generator::{generator_for, Generator};
pub use schema::{infer_schema, merge_schemas, signature, Schema};
pub use stats::{collect_stats, LiteralStats};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
