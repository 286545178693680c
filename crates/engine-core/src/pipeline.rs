use crate::{
    error::PipelineError,
    loader, schema,
    observer::{PipelineObserver, Stage},
    verify,
};
use connectors::{http::source::UserSource, sql::base::session::SqlSession};
use std::{error::Error, future::Future, io::Write};
use tracing::info;

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    pub fetched: usize,
    pub inserted: u64,
    pub skipped: u64,
    pub verified: usize,
}

/// Fetch, schema, load and verify, run strictly in that order. The first
/// failing stage aborts the run.
pub struct Pipeline<'a> {
    source: &'a dyn UserSource,
    session: &'a dyn SqlSession,
    observer: &'a dyn PipelineObserver,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: &'a dyn UserSource,
        session: &'a dyn SqlSession,
        observer: &'a dyn PipelineObserver,
    ) -> Self {
        Self {
            source,
            session,
            observer,
        }
    }

    pub async fn run(&self, out: &mut dyn Write) -> Result<RunReport, PipelineError> {
        let users = self
            .stage(Stage::Fetch, self.source.fetch_users())
            .await?;

        self.stage(Stage::Schema, schema::ensure_schema(self.session))
            .await?;

        let summary = self
            .stage(Stage::Load, loader::load(self.session, &users))
            .await?;

        let sample = self
            .stage(Stage::Verify, verify::verify(self.session, out))
            .await?;

        let report = RunReport {
            fetched: users.len(),
            inserted: summary.inserted,
            skipped: summary.skipped(),
            verified: sample.len(),
        };
        info!(
            fetched = report.fetched,
            inserted = report.inserted,
            skipped = report.skipped,
            verified = report.verified,
            "Run summary"
        );
        Ok(report)
    }

    async fn stage<T, E, F>(&self, stage: Stage, work: F) -> Result<T, PipelineError>
    where
        F: Future<Output = Result<T, E>>,
        E: Error + Into<PipelineError>,
    {
        self.observer.stage_started(stage);
        match work.await {
            Ok(value) => {
                self.observer.stage_succeeded(stage);
                Ok(value)
            }
            Err(err) => {
                self.observer.stage_failed(stage, &err);
                Err(err.into())
            }
        }
    }
}
