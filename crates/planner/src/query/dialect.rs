//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::data_type::DataType;

pub trait Dialect: Send + Sync {
    /// Returns the identifier (a table or column name) in the form the
    /// dialect accepts it.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// PostgreSQL uses `$1`, `$2`, etc.
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a generic `DataType` into a database-specific SQL type string.
    fn render_data_type(&self, data_type: &DataType) -> String;
}

/// Keywords PostgreSQL refuses as bare column or table names.
const PG_RESERVED: &[&str] = &[
    "all", "and", "any", "array", "as", "asc", "both", "case", "cast", "check", "column",
    "constraint", "create", "default", "desc", "distinct", "do", "else", "end", "except",
    "false", "for", "foreign", "from", "grant", "group", "having", "in", "into", "limit",
    "not", "null", "offset", "on", "or", "order", "primary", "references", "select", "table",
    "then", "to", "true", "union", "unique", "user", "using", "when", "where", "with",
];

#[derive(Debug, Clone)]
pub struct Postgres;

impl Postgres {
    fn is_bare_identifier(ident: &str) -> bool {
        let mut chars = ident.chars();
        let starts_well = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');

        starts_well
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            && !PG_RESERVED.contains(&ident)
    }
}

impl Dialect for Postgres {
    /// Lower-case, non-reserved names are left bare so the rendered DDL reads
    /// the way it would be written by hand; anything else is double-quoted.
    fn quote_identifier(&self, ident: &str) -> String {
        if Self::is_bare_identifier(ident) {
            ident.to_string()
        } else {
            format!(r#""{}""#, ident.replace('"', r#""""#))
        }
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        data_type.postgres_name().to_string()
    }
}
