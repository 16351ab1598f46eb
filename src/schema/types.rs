//! Schema types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the first sampled number at a position looked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    Float,
}

/// Primitive JSON kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    String,
    Number {
        /// Representative-sample hint, ignored when comparing kinds
        number: NumberKind,
    },
    Boolean,
    Null,
    /// Unresolved or conflicting type
    Any,
}

impl Primitive {
    /// An integral number
    pub const INTEGER: Primitive = Primitive::Number {
        number: NumberKind::Integer,
    };

    /// A floating-point number
    pub const FLOAT: Primitive = Primitive::Number {
        number: NumberKind::Float,
    };

    /// Kind name, shared by every dialect's signature
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number { .. } => "number",
            Primitive::Boolean => "boolean",
            Primitive::Null => "null",
            Primitive::Any => "any",
        }
    }

    /// Compare kinds, ignoring the number hint
    pub fn same_kind(&self, other: &Primitive) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inferred object shape
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Field schemas, in first-seen order
    pub properties: IndexMap<String, Schema>,

    /// Fields present on every observed instance
    pub required: BTreeSet<String>,
}

impl ObjectSchema {
    /// Create an empty object schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property that was present on the observed instance
    pub fn add_required(&mut self, name: &str, schema: Schema) {
        self.properties.insert(name.to_string(), schema);
        self.required.insert(name.to_string());
    }

    /// Add a property that is absent from at least one instance
    pub fn add_optional(&mut self, name: &str, schema: Schema) {
        self.properties.insert(name.to_string(), schema);
        self.required.remove(name);
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Inferred structural type of a JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schema {
    Primitive(Primitive),
    Array { items: Box<Schema> },
    Object(ObjectSchema),
}

impl Schema {
    /// The unresolved type
    pub fn any() -> Self {
        Schema::Primitive(Primitive::Any)
    }

    /// Array of the given item schema
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    /// Check for `Primitive(Any)`
    pub fn is_any(&self) -> bool {
        matches!(self, Schema::Primitive(Primitive::Any))
    }

    /// Borrow as an object schema
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Borrow the item schema of an array
    pub fn as_array_items(&self) -> Option<&Schema> {
        match self {
            Schema::Array { items } => Some(items),
            _ => None,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl From<Primitive> for Schema {
    fn from(primitive: Primitive) -> Self {
        Schema::Primitive(primitive)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(object: ObjectSchema) -> Self {
        Schema::Object(object)
    }
}
