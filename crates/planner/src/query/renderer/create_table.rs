use crate::query::{
    ast::create_table::{ColumnDef, CreateTable, TableConstraint},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            render_column(column, r);
        }

        for constraint in &self.constraints {
            if !self.columns.is_empty() {
                r.sql.push_str(", ");
            }
            render_constraint(constraint, r);
        }

        r.sql.push(')');
    }
}

fn render_column(column: &ColumnDef, r: &mut Renderer) {
    r.sql.push_str(&r.dialect.quote_identifier(&column.name));
    r.sql.push(' ');
    r.sql.push_str(&r.dialect.render_data_type(&column.data_type));

    if column.is_primary_key {
        r.sql.push_str(" PRIMARY KEY");
    }
}

fn render_constraint(constraint: &TableConstraint, r: &mut Renderer) {
    match constraint {
        TableConstraint::Unique { columns } => {
            r.sql.push_str("UNIQUE (");
            r.render_ident_list(columns);
            r.sql.push(')');
        }
    }
}
