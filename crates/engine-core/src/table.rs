//! Statements for the `users` table, built with the planner and rendered
//! for PostgreSQL.

use model::{
    core::{data_type::DataType, value::Value},
    records::user::UserRecord,
};
use planner::{
    query::{
        builder::{create_table::CreateTableBuilder, insert::InsertBuilder, select::SelectBuilder},
        dialect::Postgres,
        renderer::render,
        value,
    },
    table_ref,
};

pub const TABLE: &str = "users";

/// Columns written by the loader; `id` is assigned by the sequence.
pub const INSERT_COLUMNS: [&str; 4] = ["country", "name", "surname", "gender"];

/// Columns that identify a user for deduplication.
pub const NATURAL_KEY: [&str; 2] = ["name", "surname"];

/// `CREATE TABLE IF NOT EXISTS users (...)` with the natural-key constraint.
pub fn create_statement() -> String {
    let ast = CreateTableBuilder::new(table_ref!(TABLE))
        .if_not_exists()
        .primary_key("id", DataType::Serial)
        .column("country", DataType::Text)
        .column("name", DataType::Text)
        .column("surname", DataType::Text)
        .column("gender", DataType::Text)
        .unique(&NATURAL_KEY)
        .build();

    let (sql, _) = render(&ast, &Postgres);
    sql
}

/// Parameterized insert that skips rows whose natural key already exists.
pub fn insert_statement(record: &UserRecord) -> (String, Vec<Value>) {
    let row = record.to_params().into_iter().map(value).collect();
    let ast = InsertBuilder::new(table_ref!(TABLE))
        .columns(&INSERT_COLUMNS)
        .values(row)
        .on_conflict_do_nothing(&NATURAL_KEY)
        .build();

    render(&ast, &Postgres)
}

pub fn select_sample_statement(limit: u64) -> String {
    let ast = SelectBuilder::new()
        .all()
        .from(table_ref!(TABLE))
        .limit(limit)
        .build();

    let (sql, _) = render(&ast, &Postgres);
    sql
}
