//! Code generators
//!
//! Each generator is a pure recursive descent over a [`Schema`], rendering one
//! target dialect. Object shapes are deduplicated by structural signature and
//! rendered body through a [`RenderContext`] built fresh for every call, so
//! naming decisions in one generator never affect another.
//!
//! | Generator | Output |
//! |-----------|--------|
//! | [`TypeScriptGenerator`] | `export interface` blocks |
//! | [`ZodGenerator`] | `z.object` validator constants |
//! | [`SqlGenerator`] | one `CREATE TABLE` statement |
//! | [`PydanticGenerator`] | `BaseModel` classes |

mod context;
pub mod naming;
mod pydantic;
mod sql;
mod typescript;
mod zod;

pub use context::{definition_key, NameRegistry, RenderContext};
pub use pydantic::PydanticGenerator;
pub use sql::SqlGenerator;
pub use typescript::TypeScriptGenerator;
pub use zod::ZodGenerator;

use crate::config::EngineConfig;
use crate::schema::Schema;
use crate::stats::LiteralStats;
use crate::types::Dialect;

/// A code generation backend for one dialect
pub trait Generator: Send + Sync {
    /// Unique generator identifier (e.g., "typescript", "zod")
    fn name(&self) -> &'static str;

    /// Dialect rendered by this generator
    fn dialect(&self) -> Dialect;

    /// File extension for generated code (e.g., "ts", "py")
    fn extension(&self) -> &'static str;

    /// Whether literal statistics change this generator's output
    fn uses_stats(&self) -> bool {
        false
    }

    /// Line-comment prefix of the dialect
    fn comment_prefix(&self) -> &'static str {
        self.dialect().comment_prefix()
    }

    /// The comment returned in place of output for malformed input
    fn invalid_input_comment(&self) -> String {
        self.dialect().invalid_input_comment()
    }

    /// Render a schema as source text
    fn render(&self, schema: &Schema, stats: Option<&LiteralStats>, root_name: &str) -> String;
}

/// Build the generator for a dialect from engine options
pub fn generator_for(dialect: Dialect, config: &EngineConfig) -> Box<dyn Generator> {
    match dialect {
        Dialect::Typescript => Box::new(TypeScriptGenerator::new(config.typescript.clone())),
        Dialect::Zod => Box::new(ZodGenerator::new()),
        Dialect::Sql => Box::new(SqlGenerator::new(config.sql.clone())),
        Dialect::Pydantic => Box::new(PydanticGenerator::new(config.pydantic.clone())),
    }
}

/// All generators with default options
pub fn generators() -> Vec<Box<dyn Generator>> {
    let config = EngineConfig::default();
    Dialect::ALL
        .iter()
        .map(|dialect| generator_for(*dialect, &config))
        .collect()
}
