//! Call-scoped rendering state

use super::naming::type_name;
use crate::schema::Primitive;
use crate::stats::{Literal, LiteralStats};
use std::collections::{HashMap, HashSet};

/// Reuse key of an object definition
///
/// The structural signature alone ignores optionality and literal unions, so
/// the rendered field list is part of the key. Two objects share a definition
/// only when both agree. Field lines are sorted so key order does not matter.
pub fn definition_key(signature: &str, body: &str) -> String {
    let mut lines: Vec<&str> = body.lines().collect();
    lines.sort_unstable();
    format!("{signature}\n{}", lines.join("\n"))
}

/// Maps definition keys to the name first given to them
#[derive(Debug, Default)]
pub struct NameRegistry {
    by_key: HashMap<String, String>,
    taken: HashSet<String>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Name already assigned to a definition key
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    /// Assign a name to a new definition key, derived from the traversal hint
    pub fn claim(&mut self, key: String, hint: &str) -> String {
        let name = self.reserve(&type_name(hint));
        self.by_key.insert(key, name.clone());
        name
    }

    /// Take a name without a key, suffixing it when already taken
    pub fn reserve(&mut self, preferred: &str) -> String {
        let mut name = preferred.to_string();
        let mut suffix = 2;
        while self.taken.contains(&name) {
            name = format!("{preferred}{suffix}");
            suffix += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Registry, definition accumulator and statistics for one render call
#[derive(Debug)]
pub struct RenderContext<'a> {
    stats: Option<&'a LiteralStats>,
    /// Definition key to name assignments
    pub names: NameRegistry,
    definitions: Vec<String>,
}

impl<'a> RenderContext<'a> {
    /// Create a fresh context for a single render call
    pub fn new(stats: Option<&'a LiteralStats>) -> Self {
        Self {
            stats,
            names: NameRegistry::new(),
            definitions: Vec::new(),
        }
    }

    /// Append a finished definition block
    pub fn push_definition(&mut self, block: String) {
        self.definitions.push(block);
    }

    /// Consume the context, returning its definition blocks
    pub fn into_definitions(self) -> Vec<String> {
        self.definitions
    }

    /// Literals to render a field as a literal union
    ///
    /// Only returned when the path qualifies as an enum and every observed
    /// literal has the field's primitive kind.
    pub fn enum_literals(&self, path: &str, primitive: &Primitive) -> Option<Vec<&'a Literal>> {
        let values = self.stats?.enum_candidates(path)?;

        let kind_matches = match primitive {
            Primitive::String => values.iter().all(Literal::is_string),
            Primitive::Number { .. } => values.iter().all(Literal::is_number),
            _ => false,
        };

        kind_matches.then(|| values.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::collect_stats;
    use serde_json::json;

    #[test]
    fn test_definition_key_separates_bodies() {
        let required = definition_key("sig", "  zip: string;");
        let optional = definition_key("sig", "  zip?: string;");
        assert_ne!(required, optional);
        assert_eq!(required, definition_key("sig", "  zip: string;"));
    }

    #[test]
    fn test_definition_key_ignores_field_order() {
        assert_eq!(
            definition_key("sig", "  a: number;\n  b: string;"),
            definition_key("sig", "  b: string;\n  a: number;")
        );
    }

    #[test]
    fn test_registry_reuses_key() {
        let mut names = NameRegistry::new();
        assert_eq!(names.claim("sig".to_string(), "meta"), "Meta");
        assert_eq!(names.lookup("sig"), Some("Meta"));
        assert_eq!(names.lookup("other"), None);
    }

    #[test]
    fn test_registry_suffixes_collisions() {
        let mut names = NameRegistry::new();
        assert_eq!(names.claim("a".to_string(), "meta"), "Meta");
        assert_eq!(names.claim("b".to_string(), "Meta"), "Meta2");
        assert_eq!(names.reserve("Meta"), "Meta3");
    }

    #[test]
    fn test_enum_literals_respect_kind() {
        let stats = collect_stats(&json!([
            {"s": "a", "n": 1, "mixed": "x"},
            {"s": "b", "n": 2, "mixed": 3}
        ]));
        let ctx = RenderContext::new(Some(&stats));

        assert_eq!(ctx.enum_literals("s", &Primitive::String).map(|v| v.len()), Some(2));
        assert_eq!(ctx.enum_literals("n", &Primitive::INTEGER).map(|v| v.len()), Some(2));
        assert!(ctx.enum_literals("s", &Primitive::INTEGER).is_none());
        assert!(ctx.enum_literals("mixed", &Primitive::String).is_none());
        assert!(ctx.enum_literals("s", &Primitive::Any).is_none());
    }

    #[test]
    fn test_enum_literals_without_stats() {
        let ctx = RenderContext::new(None);
        assert!(ctx.enum_literals("s", &Primitive::String).is_none());
    }
}
