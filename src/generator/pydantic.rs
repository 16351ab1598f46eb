//! Pydantic model generation
//!
//! Classes are emitted dependency-first so every referenced model is defined
//! before the model that uses it. Fields missing from some samples stay
//! unwrapped unless `optional_fields` is enabled.

use super::context::{definition_key, RenderContext};
use super::naming::{python_identifier, singular, type_name, PYTHON_KEYWORDS};
use super::Generator;
use crate::config::PydanticOptions;
use crate::schema::{signature, NumberKind, ObjectSchema, Primitive, Schema};
use crate::stats::LiteralStats;
use crate::types::Dialect;
use std::collections::HashSet;

const TYPING_IMPORT: &str = "from typing import Any, List, Optional";

/// Module-level names bound by the imports; classes must not shadow them
const IMPORTED_NAMES: [&str; 5] = ["Any", "List", "Optional", "BaseModel", "Field"];

/// Renders one `BaseModel` class per distinct shape
#[derive(Debug, Clone, Default)]
pub struct PydanticGenerator {
    options: PydanticOptions,
}

impl PydanticGenerator {
    /// Create a generator with the given options
    pub fn new(options: PydanticOptions) -> Self {
        Self { options }
    }

    fn render_type(&self, schema: &Schema, hint: &str, ctx: &mut RenderContext) -> String {
        match schema {
            Schema::Primitive(p) => primitive_type(p).to_string(),
            Schema::Array { items } => {
                format!("List[{}]", self.render_type(items, &singular(hint), ctx))
            }
            Schema::Object(obj) => self.render_class(schema, obj, hint, ctx),
        }
    }

    fn render_class(
        &self,
        schema: &Schema,
        obj: &ObjectSchema,
        hint: &str,
        ctx: &mut RenderContext,
    ) -> String {
        let body = self.render_fields(obj, ctx);
        let key = definition_key(&signature(schema), &body);
        if let Some(existing) = ctx.names.lookup(&key) {
            return existing.to_string();
        }

        let name = ctx.names.claim(key, hint);
        ctx.push_definition(class_block(&name, &body));
        name
    }

    /// Attribute lines of a class body, nested classes pushed first
    fn render_fields(&self, obj: &ObjectSchema, ctx: &mut RenderContext) -> String {
        let mut attrs = HashSet::new();
        let mut fields = Vec::with_capacity(obj.len());

        for (key, prop) in &obj.properties {
            let mut ty = self.render_type(prop, key, ctx);

            let mut attr = python_identifier(key);
            while attrs.contains(&attr) {
                attr.push('_');
            }
            attrs.insert(attr.clone());

            let optional = self.options.optional_fields && !obj.is_required(key);
            if optional {
                ty = format!("Optional[{ty}]");
            }

            let default = match (attr == *key, optional) {
                (true, false) => String::new(),
                (true, true) => " = None".to_string(),
                (false, false) => format!(" = Field(alias={})", py_string(key)),
                (false, true) => format!(" = Field(default=None, alias={})", py_string(key)),
            };

            fields.push(format!("    {attr}: {ty}{default}"));
        }

        fields.join("\n")
    }
}

fn class_block(name: &str, body: &str) -> String {
    if body.is_empty() {
        format!("class {name}(BaseModel):\n    pass")
    } else {
        format!("class {name}(BaseModel):\n{body}")
    }
}

fn primitive_type(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::String => "str",
        Primitive::Number {
            number: NumberKind::Integer,
        } => "int",
        Primitive::Number {
            number: NumberKind::Float,
        } => "float",
        Primitive::Boolean => "bool",
        Primitive::Null => "None",
        Primitive::Any => "Any",
    }
}

/// Double-quoted Python string literal
fn py_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

impl Generator for PydanticGenerator {
    fn name(&self) -> &'static str {
        "pydantic"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Pydantic
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn render(&self, schema: &Schema, stats: Option<&LiteralStats>, root_name: &str) -> String {
        let mut ctx = RenderContext::new(stats);
        for reserved in IMPORTED_NAMES.iter().chain(PYTHON_KEYWORDS) {
            ctx.names.reserve(reserved);
        }
        let root = ctx.names.reserve(&type_name(root_name));

        if let Schema::Object(obj) = schema {
            let body = self.render_fields(obj, &mut ctx);
            ctx.push_definition(class_block(&root, &body));
        } else {
            let ty = self.render_type(schema, root_name, &mut ctx);
            ctx.push_definition(format!("{root} = {ty}"));
        }

        let definitions = ctx.into_definitions();
        let uses_field = definitions.iter().any(|d| d.contains(" = Field("));
        let pydantic_import = if uses_field {
            "from pydantic import BaseModel, Field"
        } else {
            "from pydantic import BaseModel"
        };

        format!(
            "{TYPING_IMPORT}\n\n{pydantic_import}\n\n\n{}",
            definitions.join("\n\n\n")
        )
    }
}
