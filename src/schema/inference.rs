//! Schema inference from JSON values

use super::types::{NumberKind, ObjectSchema, Primitive, Schema};
use serde_json::{Number, Value};

/// Default number of array elements inspected per array
pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

/// Default nesting depth before a value collapses to `any`
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Schema inferrer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Array elements sampled per array
    sample_limit: usize,
    /// Maximum depth for nested values
    max_depth: usize,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set how many leading array elements are sampled
    #[must_use]
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit.max(1);
        self
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Infer schema from a JSON value
    pub fn infer(&self, value: &Value) -> Schema {
        self.infer_at(value, 0)
    }

    fn infer_at(&self, value: &Value, depth: usize) -> Schema {
        if depth > self.max_depth {
            tracing::warn!(
                max_depth = self.max_depth,
                "nesting depth exceeded, treating value as any"
            );
            return Schema::any();
        }

        match value {
            Value::Null => Primitive::Null.into(),
            Value::Bool(_) => Primitive::Boolean.into(),
            Value::Number(n) => match number_kind(n) {
                Some(number) => Schema::Primitive(Primitive::Number { number }),
                None => Schema::any(),
            },
            Value::String(_) => Primitive::String.into(),
            Value::Array(arr) => self.infer_array(arr, depth),
            Value::Object(map) => self.infer_object(map, depth),
        }
    }

    /// Infer an array schema by folding the sampled elements
    fn infer_array(&self, arr: &[Value], depth: usize) -> Schema {
        let mut sample = arr.iter().take(self.sample_limit);

        let Some(first) = sample.next() else {
            // Nothing to learn the element shape from
            return Schema::array(Schema::any());
        };

        let items = sample.fold(self.infer_at(first, depth + 1), |merged, item| {
            merge_schemas(&merged, &self.infer_at(item, depth + 1))
        });

        Schema::array(items)
    }

    /// Every key on a single instance is required
    fn infer_object(&self, map: &serde_json::Map<String, Value>, depth: usize) -> Schema {
        let mut object = ObjectSchema::new();
        for (key, val) in map {
            object.add_required(key, self.infer_at(val, depth + 1));
        }
        Schema::Object(object)
    }
}

/// Infer schema from a JSON value with default settings (convenience function)
pub fn infer_schema(value: &Value) -> Schema {
    SchemaInferrer::new().infer(value)
}

/// Merge two schemas describing different sampled instances
///
/// `any` yields to the other side, different kinds collapse to `any`, arrays
/// merge their items and objects union their keys. A key is required in the
/// result only when both sides have it and both require it.
pub fn merge_schemas(a: &Schema, b: &Schema) -> Schema {
    match (a, b) {
        (Schema::Primitive(Primitive::Any), other) | (other, Schema::Primitive(Primitive::Any)) => {
            other.clone()
        }
        (Schema::Primitive(pa), Schema::Primitive(pb)) => {
            if pa.same_kind(pb) {
                // Keeps the left-hand number hint
                a.clone()
            } else {
                Schema::any()
            }
        }
        (Schema::Array { items: ia }, Schema::Array { items: ib }) => {
            Schema::array(merge_schemas(ia, ib))
        }
        (Schema::Object(oa), Schema::Object(ob)) => Schema::Object(merge_objects(oa, ob)),
        _ => Schema::any(),
    }
}

fn merge_objects(a: &ObjectSchema, b: &ObjectSchema) -> ObjectSchema {
    let mut merged = ObjectSchema::new();

    for (key, a_prop) in &a.properties {
        match b.get_property(key) {
            Some(b_prop) => {
                let prop = merge_schemas(a_prop, b_prop);
                if a.is_required(key) && b.is_required(key) {
                    merged.add_required(key, prop);
                } else {
                    merged.add_optional(key, prop);
                }
            }
            None => merged.add_optional(key, a_prop.clone()),
        }
    }

    for (key, b_prop) in &b.properties {
        if !a.properties.contains_key(key) {
            merged.add_optional(key, b_prop.clone());
        }
    }

    merged
}

/// Mirrors an `isInteger` check on the parsed number
///
/// `None` for literals outside the `f64` range such as `1e400`.
fn number_kind(n: &Number) -> Option<NumberKind> {
    if n.is_i64() || n.is_u64() {
        return Some(NumberKind::Integer);
    }
    let f = n.as_f64().filter(|f| f.is_finite())?;
    Some(if f.fract() == 0.0 {
        NumberKind::Integer
    } else {
        NumberKind::Float
    })
}
