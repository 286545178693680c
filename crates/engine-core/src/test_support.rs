//! In-memory doubles for the source, session and observer seams.

use crate::observer::{PipelineObserver, Stage};
use async_trait::async_trait;
use connectors::{
    http::{
        error::FetchError,
        source::{HttpUserSource, UserSource},
    },
    settings::ApiSettings,
    sql::base::{error::DbError, session::SqlSession},
};
use model::{
    core::value::Value,
    records::{
        row::{RowData, UsersRow},
        user::RawUser,
    },
};
use serde_json::json;
use std::{collections::HashMap, error::Error, sync::Mutex};
use tokio::net::TcpListener;

pub fn raw_user(country: &str, first: &str, last: &str, gender: &str) -> RawUser {
    let value = json!({
        "id": 42,
        "first_name": first,
        "last_name": last,
        "gender": gender,
        "email": "someone@example.com",
        "address": { "city": "Springfield", "country": country },
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[derive(Debug, Default)]
struct State {
    statements: Vec<String>,
    inserts: Vec<Vec<Value>>,
    table_created: bool,
    committed: Vec<UsersRow>,
    pending: Option<Vec<UsersRow>>,
    next_id: i64,
    insert_calls: usize,
}

/// A session that keeps the `users` table in memory and applies the
/// natural-key conflict rule with transaction semantics.
#[derive(Debug, Default)]
pub struct MemorySession {
    state: Mutex<State>,
    fail_on: Option<&'static str>,
    fail_on_insert: Option<usize>,
    canned_rows: Option<Vec<RowData>>,
}

impl MemorySession {
    pub fn with_table() -> Self {
        let session = Self::default();
        session.state.lock().unwrap().table_created = true;
        session
    }

    /// Fails any statement containing `fragment`.
    pub fn fail_on(mut self, fragment: &'static str) -> Self {
        self.fail_on = Some(fragment);
        self
    }

    /// Fails the `n`-th insert (zero based) of the session.
    pub fn fail_on_insert(mut self, n: usize) -> Self {
        self.fail_on_insert = Some(n);
        self
    }

    /// Returns `rows` from every query instead of the stored table.
    pub fn with_rows(mut self, rows: Vec<RowData>) -> Self {
        self.canned_rows = Some(rows);
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.state.lock().unwrap().statements.clone()
    }

    pub fn inserts(&self) -> Vec<Vec<Value>> {
        self.state.lock().unwrap().inserts.clone()
    }

    pub fn table_created(&self) -> bool {
        self.state.lock().unwrap().table_created
    }

    pub fn committed_rows(&self) -> Vec<UsersRow> {
        self.state.lock().unwrap().committed.clone()
    }

    fn check(&self, query: &str) -> Result<(), DbError> {
        match self.fail_on {
            Some(fragment) if query.contains(fragment) => Err(DbError::ConnectionClosed),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SqlSession for MemorySession {
    async fn exec(&self, query: &str) -> Result<(), DbError> {
        self.check(query)?;
        let mut state = self.state.lock().unwrap();
        state.statements.push(query.to_string());
        match query {
            "BEGIN" => state.pending = Some(state.committed.clone()),
            "COMMIT" => {
                if let Some(rows) = state.pending.take() {
                    state.committed = rows;
                }
            }
            "ROLLBACK" => state.pending = None,
            q if q.starts_with("CREATE TABLE") => state.table_created = true,
            _ => {}
        }
        Ok(())
    }

    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<u64, DbError> {
        self.check(query)?;
        let mut state = self.state.lock().unwrap();
        state.statements.push(query.to_string());

        let call = state.insert_calls;
        state.insert_calls += 1;
        if self.fail_on_insert == Some(call) {
            return Err(DbError::ConnectionClosed);
        }
        state.inserts.push(params.clone());

        let text = |i: usize| params.get(i).and_then(Value::as_str).map(str::to_string);
        let candidate = UsersRow {
            id: state.next_id + 1,
            country: text(0),
            name: text(1),
            surname: text(2),
            gender: text(3),
        };

        let State {
            pending, committed, ..
        } = &mut *state;
        let target = pending.as_mut().unwrap_or(committed);
        let clash = target
            .iter()
            .any(|r| r.name == candidate.name && r.surname == candidate.surname);
        if clash {
            return Ok(0);
        }
        target.push(candidate);
        state.next_id += 1;
        Ok(1)
    }

    async fn query_rows(&self, query: &str) -> Result<Vec<RowData>, DbError> {
        self.check(query)?;
        let mut state = self.state.lock().unwrap();
        state.statements.push(query.to_string());
        if let Some(rows) = &self.canned_rows {
            return Ok(rows.clone());
        }
        Ok(state.committed.iter().map(UsersRow::to_row_data).collect())
    }
}

pub struct StaticSource {
    users: Vec<RawUser>,
}

impl StaticSource {
    pub fn new(users: Vec<RawUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        Ok(self.users.clone())
    }
}

/// An HTTP source pointed at a local port nobody listens on.
pub async fn refused_source() -> HttpUserSource {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let vars = HashMap::from([(
        "API_URL".to_string(),
        format!("http://{addr}/api/v2/users"),
    )]);
    let settings = ApiSettings::from_vars(&vars).unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpUserSource::with_client(client, &settings)
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl PipelineObserver for RecordingObserver {
    fn stage_started(&self, stage: Stage) {
        self.events.lock().unwrap().push(format!("started {stage}"));
    }

    fn stage_succeeded(&self, stage: Stage) {
        self.events.lock().unwrap().push(format!("succeeded {stage}"));
    }

    fn stage_failed(&self, stage: Stage, _error: &dyn Error) {
        self.events.lock().unwrap().push(format!("failed {stage}"));
    }
}
