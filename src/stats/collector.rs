//! Literal statistics collection from raw JSON

use super::types::{child_path, Literal, LiteralStats};
use serde_json::Value;

/// Default number of visits before collection halts
pub const DEFAULT_BUDGET: usize = 10_000;

/// Default number of array elements descended into
pub const DEFAULT_ARRAY_SAMPLE: usize = 25;

/// Default nesting depth before collection stops descending
pub const DEFAULT_STATS_MAX_DEPTH: usize = 64;

/// Collects distinct string and number literals per field path
///
/// Array indices do not extend the path, so `items[0].status` and
/// `items[1].status` are both recorded under `items.status`.
#[derive(Debug, Clone)]
pub struct StatsCollector {
    /// Visits allowed across the whole document
    budget: usize,
    /// Leading array elements descended into
    array_sample: usize,
    /// Maximum depth for nested values
    max_depth: usize,
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsCollector {
    /// Create a collector with default caps
    pub fn new() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            array_sample: DEFAULT_ARRAY_SAMPLE,
            max_depth: DEFAULT_STATS_MAX_DEPTH,
        }
    }

    /// Set the global traversal budget
    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Set how many leading elements of each array are visited
    #[must_use]
    pub fn with_array_sample(mut self, sample: usize) -> Self {
        self.array_sample = sample;
        self
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Walk a JSON value and collect literal statistics
    pub fn collect(&self, value: &Value) -> LiteralStats {
        let walk = self.walk(value);

        if walk.truncated {
            tracing::debug!(
                budget = self.budget,
                "literal statistics truncated by traversal budget"
            );
        }

        walk.stats
    }

    /// Run one traversal, keeping its bookkeeping
    pub(super) fn walk(&self, value: &Value) -> Walk<'_> {
        let mut walk = Walk {
            collector: self,
            remaining: self.budget,
            truncated: false,
            stats: LiteralStats::new(),
        };
        walk.visit(value, "", 0);
        walk
    }
}

/// Per-call traversal state
pub(super) struct Walk<'a> {
    collector: &'a StatsCollector,
    remaining: usize,
    /// Set once a value is skipped for lack of budget
    pub(super) truncated: bool,
    pub(super) stats: LiteralStats,
}

impl Walk<'_> {
    fn visit(&mut self, value: &Value, path: &str, depth: usize) {
        if depth > self.collector.max_depth {
            return;
        }
        if self.remaining == 0 {
            self.truncated = true;
            return;
        }
        self.remaining -= 1;

        match value {
            Value::String(s) => self.stats.record(path, Literal::String(s.clone())),
            // Out-of-range literals have no value to compare
            Value::Number(n) if n.as_f64().is_some() => {
                self.stats.record(path, Literal::Number(n.clone()));
            }
            Value::Array(arr) => {
                for item in arr.iter().take(self.collector.array_sample) {
                    self.visit(item, path, depth + 1);
                }
            }
            Value::Object(map) => {
                for (key, val) in map {
                    self.visit(val, &child_path(path, key), depth + 1);
                }
            }
            Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }
}

/// Collect literal statistics with default caps (convenience function)
pub fn collect_stats(value: &Value) -> LiteralStats {
    StatsCollector::new().collect(value)
}
