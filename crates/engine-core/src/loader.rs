use crate::{error::LoadError, table};
use connectors::sql::base::session::SqlSession;
use model::records::user::{RawUser, UserRecord};
use tracing::{debug, warn};

/// Outcome of a load: how many records were offered and how many rows the
/// database actually accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub attempted: usize,
    pub inserted: u64,
}

impl LoadSummary {
    /// Records dropped by the natural-key conflict rule.
    pub fn skipped(&self) -> u64 {
        (self.attempted as u64).saturating_sub(self.inserted)
    }
}

/// Inserts `users` inside a single transaction.
///
/// Every record is extracted before the transaction is opened, so a
/// malformed payload never touches the database. An insert failure rolls
/// the whole batch back.
pub async fn load(session: &dyn SqlSession, users: &[RawUser]) -> Result<LoadSummary, LoadError> {
    let records = users
        .iter()
        .enumerate()
        .map(|(index, raw)| UserRecord::from_raw(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    session.begin().await.map_err(LoadError::Begin)?;

    let mut inserted = 0;
    for (index, record) in records.iter().enumerate() {
        let (sql, params) = table::insert_statement(record);
        match session.exec_params(&sql, params).await {
            Ok(affected) => {
                if affected == 0 {
                    debug!(
                        index,
                        name = %record.first_name,
                        surname = %record.last_name,
                        "User already present; skipped"
                    );
                }
                inserted += affected;
            }
            Err(source) => {
                if let Err(rollback_err) = session.rollback().await {
                    warn!("Rollback after failed insert also failed: {rollback_err}");
                }
                return Err(LoadError::Insert { index, source });
            }
        }
    }

    session.commit().await.map_err(LoadError::Commit)?;

    Ok(LoadSummary {
        attempted: records.len(),
        inserted,
    })
}
