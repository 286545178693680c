use crate::{
    settings::DatabaseSettings,
    sql::{
        base::{
            error::{ConnectorError, DbError},
            session::SqlSession,
        },
        postgres::{params::PgParamStore, row::to_row_data, utils::connect_client},
    },
};
use async_trait::async_trait;
use model::{core::value::Value, records::row::RowData};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, Config};
use tracing::{debug, info, warn};

/// The run's only PostgreSQL connection.
///
/// Dropping the session drops the client, which makes the driver task send
/// a terminate message and exit. [`PgSession::close`] does the same and
/// also waits for the driver to finish.
pub struct PgSession {
    client: Client,
    driver: JoinHandle<()>,
}

impl PgSession {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, ConnectorError> {
        info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.database,
            "Connecting to PostgreSQL"
        );
        Self::connect_with(settings.pg_config()).await
    }

    /// Connects with a prebuilt driver configuration, e.g. one parsed from a
    /// `postgres://` URL.
    pub async fn connect_with(config: Config) -> Result<Self, ConnectorError> {
        let (client, driver) = connect_client(config).await?;
        Ok(PgSession { client, driver })
    }

    pub async fn close(self) {
        let PgSession { client, driver } = self;
        drop(client);
        if let Err(err) = driver.await {
            warn!(%err, "Postgres connection task did not shut down cleanly");
        }
        debug!("PostgreSQL session closed");
    }

    fn ensure_open(&self) -> Result<(), DbError> {
        if self.client.is_closed() {
            return Err(DbError::ConnectionClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl SqlSession for PgSession {
    async fn exec(&self, query: &str) -> Result<(), DbError> {
        self.ensure_open()?;
        debug!(%query, "Executing statement");
        self.client.batch_execute(query).await?;
        Ok(())
    }

    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<u64, DbError> {
        self.ensure_open()?;
        let bindings = PgParamStore::from_values(params);
        let affected = self.client.execute(query, &bindings.as_refs()).await?;
        Ok(affected)
    }

    async fn query_rows(&self, query: &str) -> Result<Vec<RowData>, DbError> {
        self.ensure_open()?;
        debug!(%query, "Querying rows");
        let rows = self.client.query(query, &[]).await?;
        rows.iter().map(to_row_data).collect()
    }
}
