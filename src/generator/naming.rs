//! Identifier and naming helpers shared by the generators

use regex::Regex;
use std::sync::LazyLock;

/// Keys that can be written bare in a TypeScript object type
static JS_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// ASCII Python identifiers
static PY_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Reserved words of the Python grammar
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Definition name for a traversal hint: first letter capitalized
///
/// Characters that cannot appear in an identifier become `_`.
pub fn type_name(hint: &str) -> String {
    let cleaned: String = hint
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let mut chars = cleaned.chars();
    match chars.next() {
        None => "Type".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{cleaned}"),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Naming hint for the elements of an array named `hint`
pub fn singular(hint: &str) -> String {
    if let Some(stem) = hint.strip_suffix("ies").filter(|s| !s.is_empty()) {
        return format!("{stem}y");
    }
    if hint.ends_with("ss") {
        return format!("{hint}Item");
    }
    match hint.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{hint}Item"),
    }
}

/// `RootItem` -> `root_item`
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else if c.is_alphanumeric() {
            out.push(c);
            prev_lower = true;
        } else {
            out.push('_');
            prev_lower = false;
        }
    }

    out
}

/// Object key as written in a TypeScript/JavaScript object type or literal
pub fn js_key(key: &str) -> String {
    if JS_IDENTIFIER.is_match(key) {
        key.to_string()
    } else {
        serde_json::to_string(key).unwrap_or_default()
    }
}

/// Whether a key can be used verbatim as a model field
///
/// Pydantic treats underscore-prefixed attributes as private, not as fields.
pub fn is_python_identifier(key: &str) -> bool {
    PY_IDENTIFIER.is_match(key) && !key.starts_with('_') && !PYTHON_KEYWORDS.contains(&key)
}

/// A valid, non-keyword Python attribute derived from a key
pub fn python_identifier(key: &str) -> String {
    if is_python_identifier(key) {
        return key.to_string();
    }

    let mapped: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    let mut name = mapped.trim_start_matches('_').to_string();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name = format!("field_{name}");
    }
    if PYTHON_KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Quoted SQL identifier with embedded quotes doubled
pub fn quote_sql(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
