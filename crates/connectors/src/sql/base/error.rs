use thiserror::Error;

/// All errors coming from statement execution.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any PostgreSQL driver error.
    #[error("SQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A result column has a type the row conversion does not map.
    #[error("Unsupported column type {type_name} for column `{column}`")]
    UnsupportedColumn { column: String, type_name: String },

    /// The connection driver has stopped; nothing more can be executed.
    #[error("Connection is closed")]
    ConnectionClosed,
}

/// Errors happening while establishing a session.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The driver could not connect or authenticate.
    #[error("Postgres connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// The TLS connector could not be built.
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
}
