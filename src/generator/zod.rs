//! Zod validator generation

use super::context::{definition_key, RenderContext};
use super::naming::{js_key, singular, type_name};
use super::Generator;
use crate::schema::{signature, ObjectSchema, Primitive, Schema};
use crate::stats::{child_path, Literal, LiteralStats};
use crate::types::Dialect;

/// Renders one `z.object` constant per distinct shape
#[derive(Debug, Clone, Copy, Default)]
pub struct ZodGenerator;

impl ZodGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    fn render_type(
        &self,
        schema: &Schema,
        hint: &str,
        path: &str,
        ctx: &mut RenderContext,
    ) -> String {
        match schema {
            Schema::Primitive(p) => primitive_validator(p).to_string(),
            Schema::Array { items } => {
                let inner = self.render_type(items, &singular(hint), path, ctx);
                format!("z.array({inner})")
            }
            Schema::Object(obj) => self.render_object(schema, obj, hint, path, ctx),
        }
    }

    fn render_object(
        &self,
        schema: &Schema,
        obj: &ObjectSchema,
        hint: &str,
        path: &str,
        ctx: &mut RenderContext,
    ) -> String {
        let body = self.render_fields(obj, path, ctx);
        let key = definition_key(&signature(schema), &body);
        if let Some(existing) = ctx.names.lookup(&key) {
            return schema_const(existing);
        }

        let name = schema_const(&ctx.names.claim(key, hint));
        ctx.push_definition(object_block(&name, &body));
        name
    }

    /// Field lines of a `z.object` body, nested definitions pushed first
    fn render_fields(&self, obj: &ObjectSchema, path: &str, ctx: &mut RenderContext) -> String {
        obj.properties
            .iter()
            .map(|(key, prop)| {
                let mut validator = self.field_validator(prop, key, &child_path(path, key), ctx);
                if !obj.is_required(key) {
                    validator.push_str(".optional()");
                }
                format!("  {}: {validator},", js_key(key))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Object fields may upgrade to an enum or literal union
    fn field_validator(
        &self,
        schema: &Schema,
        key: &str,
        path: &str,
        ctx: &mut RenderContext,
    ) -> String {
        if let Schema::Primitive(p) = schema {
            if let Some(literals) = ctx.enum_literals(path, p) {
                return literal_validator(&literals);
            }
        }
        self.render_type(schema, key, path, ctx)
    }
}

fn primitive_validator(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::String => "z.string()",
        Primitive::Number { .. } => "z.number()",
        Primitive::Boolean => "z.boolean()",
        Primitive::Null => "z.null()",
        Primitive::Any => "z.any()",
    }
}

/// `z.enum` for strings, a union of `z.literal` for numbers
fn literal_validator(literals: &[&Literal]) -> String {
    let rendered: Vec<String> = literals.iter().map(|l| l.to_json_literal()).collect();

    if literals.iter().all(|l| l.is_string()) {
        format!("z.enum([{}])", rendered.join(", "))
    } else {
        let members: Vec<String> = rendered
            .iter()
            .map(|l| format!("z.literal({l})"))
            .collect();
        format!("z.union([{}])", members.join(", "))
    }
}

fn object_block(name: &str, body: &str) -> String {
    if body.is_empty() {
        format!("export const {name} = z.object({{}});")
    } else {
        format!("export const {name} = z.object({{\n{body}\n}});")
    }
}

fn schema_const(type_name: &str) -> String {
    format!("{type_name}Schema")
}

impl Generator for ZodGenerator {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Zod
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn uses_stats(&self) -> bool {
        true
    }

    fn render(&self, schema: &Schema, stats: Option<&LiteralStats>, root_name: &str) -> String {
        let mut ctx = RenderContext::new(stats);

        // The root keeps its name even when a nested shape would claim it
        let root = ctx.names.reserve(&type_name(root_name));

        let root_validator = if let Schema::Object(obj) = schema {
            let body = self.render_fields(obj, "", &mut ctx);
            object_block(&schema_const(&root), &body)
        } else {
            let validator = self.render_type(schema, root_name, "", &mut ctx);
            format!("export const {} = {validator};", schema_const(&root))
        };
        ctx.push_definition(root_validator);

        ctx.push_definition(format!(
            "export type {root} = z.infer<typeof {}>;",
            schema_const(&root)
        ));

        let mut out = String::from("import { z } from \"zod\";\n\n");
        out.push_str(&ctx.into_definitions().join("\n\n"));
        out
    }
}
