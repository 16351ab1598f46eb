//! TypeScript interface generation

use super::context::{definition_key, RenderContext};
use super::naming::{js_key, singular, type_name};
use super::Generator;
use crate::config::TypeScriptOptions;
use crate::schema::{signature, ObjectSchema, Schema};
use crate::stats::{child_path, Literal, LiteralStats};
use crate::types::Dialect;

/// Renders `export interface` blocks, dependencies first
#[derive(Debug, Clone, Default)]
pub struct TypeScriptGenerator {
    options: TypeScriptOptions,
}

impl TypeScriptGenerator {
    /// Create a generator with the given options
    pub fn new(options: TypeScriptOptions) -> Self {
        Self { options }
    }

    fn render_type(
        &self,
        schema: &Schema,
        hint: &str,
        path: &str,
        ctx: &mut RenderContext,
    ) -> String {
        match schema {
            Schema::Primitive(p) => p.name().to_string(),
            Schema::Array { items } => {
                let inner = self.render_type(items, &singular(hint), path, ctx);
                self.array_of(&inner)
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
            return existing.to_string();
        }

        let name = ctx.names.claim(key, hint);
        ctx.push_definition(interface_block(&name, &body));
        name
    }

    /// Field lines of an interface body, nested definitions pushed first
    fn render_fields(&self, obj: &ObjectSchema, path: &str, ctx: &mut RenderContext) -> String {
        obj.properties
            .iter()
            .map(|(key, prop)| {
                let optional = if obj.is_required(key) { "" } else { "?" };
                let ty = self.field_type(prop, key, &child_path(path, key), ctx);
                format!("  {}{optional}: {ty};", js_key(key))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Object fields may upgrade to a literal union
    fn field_type(
        &self,
        schema: &Schema,
        key: &str,
        path: &str,
        ctx: &mut RenderContext,
    ) -> String {
        if let Schema::Primitive(p) = schema {
            if let Some(literals) = ctx.enum_literals(path, p) {
                return literal_union(&literals);
            }
        }
        self.render_type(schema, key, path, ctx)
    }

    fn array_of(&self, inner: &str) -> String {
        // Unions and readonly arrays need parentheses before `[]`
        let inner = if inner.contains(' ') {
            format!("({inner})")
        } else {
            inner.to_string()
        };

        if self.options.readonly_arrays {
            format!("readonly {inner}[]")
        } else {
            format!("{inner}[]")
        }
    }
}

fn interface_block(name: &str, body: &str) -> String {
    if body.is_empty() {
        format!("export interface {name} {{}}")
    } else {
        format!("export interface {name} {{\n{body}\n}}")
    }
}

fn literal_union(literals: &[&Literal]) -> String {
    literals
        .iter()
        .map(|l| l.to_json_literal())
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Generator for TypeScriptGenerator {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Typescript
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

        if let Schema::Object(obj) = schema {
            let body = self.render_fields(obj, "", &mut ctx);
            ctx.push_definition(interface_block(&root, &body));
        } else {
            let ty = self.render_type(schema, root_name, "", &mut ctx);
            ctx.push_definition(format!("export type {root} = {ty};"));
        }

        ctx.into_definitions().join("\n\n")
    }
}
