//! Structural signatures for deduplicating object shapes

use super::types::Schema;

/// Canonical structural key of a schema
///
/// Objects serialize as a JSON array of `[name, signature]` pairs sorted by
/// field name, so two objects with the same fields and nested shapes share a
/// signature regardless of key order. Required-ness is not part of the key.
pub fn signature(schema: &Schema) -> String {
    match schema {
        Schema::Primitive(p) => p.name().to_string(),
        Schema::Array { items } => format!("[{}]", signature(items)),
        Schema::Object(obj) => {
            let mut fields: Vec<(&String, String)> = obj
                .properties
                .iter()
                .map(|(name, prop)| (name, signature(prop)))
                .collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            serde_json::to_string(&fields).unwrap_or_default()
        }
    }
}
