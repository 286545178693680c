use crate::sql::base::error::DbError;
use async_trait::async_trait;
use model::{core::value::Value, records::row::RowData};

/// A single database session, owned by one caller for the whole run.
///
/// Statements run in autocommit mode unless they are issued between
/// [`SqlSession::begin`] and [`SqlSession::commit`]/[`SqlSession::rollback`].
#[async_trait]
pub trait SqlSession: Send + Sync {
    /// Runs a statement without parameters (DDL, transaction control).
    async fn exec(&self, query: &str) -> Result<(), DbError>;

    /// Runs a parameterized statement and returns the number of affected rows.
    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<u64, DbError>;

    async fn query_rows(&self, query: &str) -> Result<Vec<RowData>, DbError>;

    async fn begin(&self) -> Result<(), DbError> {
        self.exec("BEGIN").await
    }

    async fn commit(&self) -> Result<(), DbError> {
        self.exec("COMMIT").await
    }

    async fn rollback(&self) -> Result<(), DbError> {
        self.exec("ROLLBACK").await
    }
}
