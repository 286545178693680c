use crate::core::value::{Value, render_tuple};
use std::fmt;
use thiserror::Error;

/// One row read back from storage, with its columns in select order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowData {
    pub values: Vec<Value>,
}

impl RowData {
    pub fn new(values: Vec<Value>) -> Self {
        RowData { values }
    }
}

impl fmt::Display for RowData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tuple(&self.values))
    }
}

/// Raised when a row read from the users table does not have its shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowShapeError {
    #[error("expected {expected} columns, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("column `{column}` holds a {found} value, expected {expected}")]
    Type {
        column: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// A persisted row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersRow {
    pub id: i64,
    pub country: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub gender: Option<String>,
}

impl UsersRow {
    pub const COLUMNS: [&'static str; 5] = ["id", "country", "name", "surname", "gender"];

    pub fn to_row_data(&self) -> RowData {
        RowData::new(vec![
            Value::Int(self.id),
            Value::from(self.country.clone()),
            Value::from(self.name.clone()),
            Value::from(self.surname.clone()),
            Value::from(self.gender.clone()),
        ])
    }
}

impl TryFrom<RowData> for UsersRow {
    type Error = RowShapeError;

    fn try_from(row: RowData) -> Result<Self, Self::Error> {
        let [id, country, name, surname, gender]: [Value; 5] =
            row.values.try_into().map_err(|values: Vec<Value>| RowShapeError::Arity {
                expected: Self::COLUMNS.len(),
                found: values.len(),
            })?;

        let id = id.as_i64().ok_or(RowShapeError::Type {
            column: "id",
            expected: "integer",
            found: id.kind(),
        })?;

        Ok(UsersRow {
            id,
            country: text_column("country", country)?,
            name: text_column("name", name)?,
            surname: text_column("surname", surname)?,
            gender: text_column("gender", gender)?,
        })
    }
}

impl fmt::Display for UsersRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_row_data(), f)
    }
}

fn text_column(column: &'static str, value: Value) -> Result<Option<String>, RowShapeError> {
    match value {
        Value::String(v) => Ok(Some(v)),
        Value::Null => Ok(None),
        other => Err(RowShapeError::Type {
            column,
            expected: "string",
            found: other.kind(),
        }),
    }
}
