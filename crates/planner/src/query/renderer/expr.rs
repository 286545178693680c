use crate::query::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Value(value) => r.add_param(value.clone()),
            Expr::Wildcard => r.sql.push('*'),
        }
    }
}
