use crate::query::ast::{
    common::TableRef,
    expr::Expr,
    insert::{ConflictAction, Insert, OnConflict},
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.ast.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn values(mut self, row: Vec<Expr>) -> Self {
        self.ast.values.push(row);
        self
    }

    /// Turns a unique-key violation on `columns` into a no-op.
    pub fn on_conflict_do_nothing(mut self, columns: &[&str]) -> Self {
        self.ast.on_conflict = Some(OnConflict {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            action: ConflictAction::DoNothing,
        });
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
