use crate::query::ast::{
    common::TableRef,
    create_table::{ColumnDef, CreateTable, TableConstraint},
};
use model::core::data_type::DataType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    /// Adds a nullable column.
    pub fn column(self, name: &str, data_type: DataType) -> Self {
        self.column_def(name, data_type, false)
    }

    pub fn primary_key(self, name: &str, data_type: DataType) -> Self {
        self.column_def(name, data_type, true)
    }

    fn column_def(mut self, name: &str, data_type: DataType, is_primary_key: bool) -> Self {
        self.ast.columns.push(ColumnDef {
            name: name.to_string(),
            data_type,
            is_primary_key,
        });
        self
    }

    pub fn unique(mut self, columns: &[&str]) -> Self {
        self.ast.constraints.push(TableConstraint::Unique {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}
