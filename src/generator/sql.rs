//! SQL table definition generation
//!
//! Only the top-level object (or the element object of a top-level array)
//! becomes a table. Nested objects and arrays collapse to `JSONB` columns.

use super::naming::{quote_sql, snake_case, type_name};
use super::Generator;
use crate::config::SqlOptions;
use crate::schema::{ObjectSchema, Primitive, Schema};
use crate::stats::LiteralStats;
use crate::types::Dialect;

/// Name of the synthetic primary-key column
const ROW_ID: &str = "_row_id";

/// Returned when the root has no tabular shape
pub const NOT_TABULAR_COMMENT: &str = "-- SQL requires an object or array of objects";

/// Renders a single `CREATE TABLE` statement
#[derive(Debug, Clone, Default)]
pub struct SqlGenerator {
    options: SqlOptions,
}

impl SqlGenerator {
    /// Create a generator with the given options
    pub fn new(options: SqlOptions) -> Self {
        Self { options }
    }

    fn table_name(&self, root_name: &str) -> String {
        match &self.options.table_name {
            Some(name) => quote_sql(name),
            None => quote_sql(&snake_case(&type_name(root_name))),
        }
    }
}

fn column_type(schema: &Schema) -> &'static str {
    match schema {
        Schema::Primitive(Primitive::Number { .. }) => "DOUBLE PRECISION",
        Schema::Primitive(Primitive::Boolean) => "BOOLEAN",
        Schema::Primitive(_) => "TEXT",
        Schema::Object(_) | Schema::Array { .. } => "JSONB",
    }
}

/// Synthetic key column name that does not clash with a data column
fn row_id_column(table: &ObjectSchema) -> String {
    let mut name = ROW_ID.to_string();
    while table.properties.contains_key(&name) {
        name.insert(0, '_');
    }
    name
}

impl Generator for SqlGenerator {
    fn name(&self) -> &'static str {
        "sql"
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sql
    }

    fn extension(&self) -> &'static str {
        "sql"
    }

    fn render(&self, schema: &Schema, _stats: Option<&LiteralStats>, root_name: &str) -> String {
        let table = match schema {
            Schema::Object(obj) => obj,
            Schema::Array { items } => match items.as_ref() {
                Schema::Object(obj) => obj,
                _ => return NOT_TABULAR_COMMENT.to_string(),
            },
            Schema::Primitive(_) => return NOT_TABULAR_COMMENT.to_string(),
        };

        let mut columns = vec![format!("  {} BIGSERIAL PRIMARY KEY", row_id_column(table))];
        columns.extend(table.properties.iter().map(|(key, prop)| {
            let not_null = if table.is_required(key) { " NOT NULL" } else { "" };
            format!("  {} {}{not_null}", quote_sql(key), column_type(prop))
        }));

        format!(
            "CREATE TABLE {} (\n{}\n);",
            self.table_name(root_name),
            columns.join(",\n")
        )
    }
}
