//! Literal statistics types

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Smallest distinct-value count treated as an enum
pub const ENUM_MIN_VALUES: usize = 2;

/// Largest distinct-value count treated as an enum
pub const ENUM_MAX_VALUES: usize = 8;

/// An observed literal leaf value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Number(serde_json::Number),
}

/// Strings sort before numbers; numbers sort by value
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Literal::String(a), Literal::String(b)) => a.cmp(b),
            (Literal::String(_), Literal::Number(_)) => Ordering::Less,
            (Literal::Number(_), Literal::String(_)) => Ordering::Greater,
            (Literal::Number(a), Literal::Number(b)) => {
                let (fa, fb) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
                fa.total_cmp(&fb).then_with(|| a.to_string().cmp(&b.to_string()))
            }
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Literal {
    /// Whether this literal is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Literal::String(_))
    }

    /// Whether this literal is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Literal::Number(_))
    }

    /// Render as a JSON literal (quoted and escaped strings, bare numbers)
    pub fn to_json_literal(&self) -> String {
        match self {
            Literal::String(s) => serde_json::to_string(s).unwrap_or_default(),
            Literal::Number(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json_literal())
    }
}

/// Distinct literals observed per dotted field path
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LiteralStats {
    paths: BTreeMap<String, BTreeSet<Literal>>,
}

impl LiteralStats {
    /// Create an empty statistics map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a literal at a path
    pub fn record(&mut self, path: &str, literal: Literal) {
        self.paths.entry(path.to_string()).or_default().insert(literal);
    }

    /// All literals seen at a path
    pub fn values(&self, path: &str) -> Option<&BTreeSet<Literal>> {
        self.paths.get(path)
    }

    /// Literals at a path, only when the distinct count qualifies as an enum
    pub fn enum_candidates(&self, path: &str) -> Option<&BTreeSet<Literal>> {
        self.values(path).filter(|values| is_enum_candidate(values.len()))
    }

    /// Iterate over all recorded paths
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<Literal>)> {
        self.paths.iter()
    }

    /// Number of recorded paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Enum-candidacy predicate on a distinct-value count
pub fn is_enum_candidate(distinct: usize) -> bool {
    (ENUM_MIN_VALUES..=ENUM_MAX_VALUES).contains(&distinct)
}

/// Join a field name onto a dotted path
pub fn child_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}
