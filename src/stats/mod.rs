//! Literal statistics module
//!
//! A second pass over the raw JSON that records the distinct string and
//! number values seen at each field path. Generators use it to render
//! enum-like fields as literal unions.

mod collector;
mod types;

pub use collector::{
    collect_stats, StatsCollector, DEFAULT_ARRAY_SAMPLE, DEFAULT_BUDGET, DEFAULT_STATS_MAX_DEPTH,
};
pub use types::{
    child_path, is_enum_candidate, Literal, LiteralStats, ENUM_MAX_VALUES, ENUM_MIN_VALUES,
};

#[cfg(test)]
mod tests;
