use crate::{error::VerifyError, table};
use connectors::sql::base::session::SqlSession;
use model::records::row::UsersRow;
use std::io::Write;

/// Maximum number of rows read back after a load.
pub const SAMPLE_LIMIT: u64 = 100;

/// Reads up to [`SAMPLE_LIMIT`] rows from `users` and writes each one to
/// `out` as a tuple line. Row order is whatever the database returns.
pub async fn verify(
    session: &dyn SqlSession,
    out: &mut dyn Write,
) -> Result<Vec<UsersRow>, VerifyError> {
    let sql = table::select_sample_statement(SAMPLE_LIMIT);
    let rows = session.query_rows(&sql).await?;

    let mut sample = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let row = UsersRow::try_from(row)
            .map_err(|source| VerifyError::RowShape { index, source })?;
        writeln!(out, "{row}")?;
        sample.push(row);
    }
    out.flush()?;

    Ok(sample)
}
