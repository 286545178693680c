//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::query::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of expressions to be returned, e.g. `*`.
    pub columns: Vec<Expr>,

    /// e.g., `FROM users`
    pub from: Option<TableRef>,

    /// The LIMIT clause, rendered inline.
    pub limit: Option<u64>,
}
