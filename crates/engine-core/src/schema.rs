use crate::{error::SchemaError, table};
use connectors::sql::base::session::SqlSession;
use tracing::debug;

/// Creates the `users` table when it does not exist yet. Existing tables,
/// and the rows in them, are left untouched.
pub async fn ensure_schema(session: &dyn SqlSession) -> Result<(), SchemaError> {
    let ddl = table::create_statement();
    debug!(sql = %ddl, "Applying users table DDL");
    session.exec(&ddl).await?;
    Ok(())
}
