use crate::observer::Stage;
use connectors::{http::error::FetchError, sql::base::error::DbError};
use model::records::{row::RowShapeError, user::MalformedRecordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to create the users table: {0}")]
    Ddl(#[from] DbError),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open the load transaction: {0}")]
    Begin(#[source] DbError),

    #[error(transparent)]
    Malformed(#[from] MalformedRecordError),

    #[error("Insert of record {index} failed: {source}")]
    Insert {
        index: usize,
        #[source]
        source: DbError,
    },

    #[error("Failed to commit the load transaction: {0}")]
    Commit(#[source] DbError),
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Failed to read back the users table: {0}")]
    Query(#[from] DbError),

    #[error("Row {index} does not look like a users row: {source}")]
    RowShape {
        index: usize,
        #[source]
        source: RowShapeError,
    },

    #[error("Failed to write the verification sample: {0}")]
    Output(#[from] std::io::Error),
}

/// A stage failure as seen by the caller of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetch stage failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Schema stage failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("Load stage failed: {0}")]
    Load(#[from] LoadError),

    #[error("Verify stage failed: {0}")]
    Verify(#[from] VerifyError),
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Fetch(_) => Stage::Fetch,
            PipelineError::Schema(_) => Stage::Schema,
            PipelineError::Load(_) => Stage::Load,
            PipelineError::Verify(_) => Stage::Verify,
        }
    }
}
