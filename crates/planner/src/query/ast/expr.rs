//! Expressions that can appear in the rendered statements.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value bound as a query parameter.
    Value(Value),
    /// `*`
    Wildcard,
}
