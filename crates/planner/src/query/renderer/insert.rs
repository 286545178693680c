use crate::query::{
    ast::insert::{ConflictAction, Insert, OnConflict},
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        r.render_ident_list(&self.columns);
        r.sql.push(')');

        // 2. VALUES (...)
        if !self.values.is_empty() {
            render_values(self, r);
        }

        if let Some(on_conflict) = &self.on_conflict {
            render_on_conflict(on_conflict, r);
        }
    }
}

fn render_values(insert: &Insert, r: &mut Renderer) {
    r.sql.push_str(" VALUES ");
    for (i, row) in insert.values.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql.push('(');
        for (j, val) in row.iter().enumerate() {
            if j > 0 {
                r.sql.push_str(", ");
            }
            val.render(r);
        }
        r.sql.push(')');
    }
}

fn render_on_conflict(on_conflict: &OnConflict, r: &mut Renderer) {
    r.sql.push_str(" ON CONFLICT");
    if !on_conflict.columns.is_empty() {
        r.sql.push_str(" (");
        r.render_ident_list(&on_conflict.columns);
        r.sql.push(')');
    }

    match on_conflict.action {
        ConflictAction::DoNothing => r.sql.push_str(" DO NOTHING"),
    }
}
