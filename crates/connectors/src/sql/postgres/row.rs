use crate::sql::base::error::DbError;
use model::{core::value::Value, records::row::RowData};
use tokio_postgres::{Column, Row as PgRow, types::Type};

/// Converts a driver row into [`RowData`], keeping the select order.
pub fn to_row_data(row: &PgRow) -> Result<RowData, DbError> {
    let values = row
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| column_value(row, idx, column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RowData::new(values))
}

fn column_value(row: &PgRow, idx: usize, column: &Column) -> Result<Value, DbError> {
    let ty = column.type_();
    let value = if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)?.map(|v| Value::Int(v.into()))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)?.map(Value::from)
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)?.map(Value::Int)
    } else if is_text(ty) {
        row.try_get::<_, Option<String>>(idx)?.map(Value::String)
    } else {
        return Err(DbError::UnsupportedColumn {
            column: column.name().to_string(),
            type_name: ty.name().to_string(),
        });
    };

    Ok(value.unwrap_or(Value::Null))
}

fn is_text(ty: &Type) -> bool {
    [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(ty)
}
