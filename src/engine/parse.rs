//! Depth-bounded JSON parsing
//!
//! Inference and statistics never look below their depth caps, so containers
//! nested deeper than that are replaced with `null` before the document is
//! materialized. The full text is still validated first, so pruning never
//! turns malformed input into a result.

use crate::config::MAX_DEPTH_LIMIT;
use crate::error::Result;
use crate::types::JsonValue;
use serde::de::IgnoredAny;
use std::borrow::Cow;

/// Parse a document, pruning containers that open at `depth_limit` or deeper
///
/// The limit is clamped to `1..=MAX_DEPTH_LIMIT + 1`, which keeps the pruned
/// document inside serde_json's recursion limit.
pub fn parse_document(text: &str, depth_limit: usize) -> Result<JsonValue> {
    let depth_limit = depth_limit.clamp(1, MAX_DEPTH_LIMIT + 1);
    match prune_deep_containers(text, depth_limit) {
        Cow::Borrowed(text) => Ok(serde_json::from_str(text)?),
        Cow::Owned(pruned) => {
            // Skipping values does not recurse, so any nesting validates here
            serde_json::from_str::<IgnoredAny>(text)?;
            tracing::debug!(depth_limit, "pruned containers below the depth limit");
            Ok(serde_json::from_str(&pruned)?)
        }
    }
}

/// Replace every container opened with `limit` containers already open
fn prune_deep_containers(text: &str, limit: usize) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut pruned: Option<String> = None;
    let mut copied = 0;
    let mut depth = 0usize;
    let mut scan = StringScan::default();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if scan.consume(b) {
            i += 1;
            continue;
        }

        match b {
            b'[' | b'{' if depth >= limit => {
                let end = container_end(bytes, i);
                let out = pruned.get_or_insert_with(|| String::with_capacity(text.len()));
                out.push_str(&text[copied..i]);
                out.push_str("null");
                copied = end;
                i = end;
                continue;
            }
            b'[' | b'{' => depth += 1,
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    match pruned {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Index just past the container that opens at `start`
fn container_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut scan = StringScan::default();

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if scan.consume(b) {
            continue;
        }
        match b {
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return start + offset + 1;
                }
            }
            _ => {}
        }
    }

    bytes.len()
}

/// Tracks whether the scanner is inside a string literal
#[derive(Default)]
struct StringScan {
    in_string: bool,
    escaped: bool,
}

impl StringScan {
    /// Feed one byte; returns true when it belongs to a string literal
    fn consume(&mut self, b: u8) -> bool {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if b == b'\\' {
                self.escaped = true;
            } else if b == b'"' {
                self.in_string = false;
            }
            return true;
        }
        if b == b'"' {
            self.in_string = true;
            return true;
        }
        false
    }
}
