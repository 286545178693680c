//! Stage lifecycle notifications.
//!
//! The pipeline never logs directly; it reports to a [`PipelineObserver`]
//! so that stages can be exercised without a log sink.

use std::{error::Error, fmt};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fetch,
    Schema,
    Load,
    Verify,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Fetch, Stage::Schema, Stage::Load, Stage::Verify];

    pub fn start_message(&self) -> &'static str {
        match self {
            Stage::Fetch => "Fetching data from the API",
            Stage::Schema => "Creating users table",
            Stage::Load => "Inserting data into the users table",
            Stage::Verify => "Verifying data",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Stage::Fetch => "Fetched data from the API",
            Stage::Schema => "Created users table",
            Stage::Load => "Inserted data into the users table",
            Stage::Verify => "Verified data",
        }
    }

    /// Used in failure messages: "Error occurred while <activity>".
    pub fn activity(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetching data from the API",
            Stage::Schema => "creating users table",
            Stage::Load => "inserting data into users table",
            Stage::Verify => "verifying data",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Schema => "schema",
            Stage::Load => "load",
            Stage::Verify => "verify",
        };
        f.write_str(name)
    }
}

pub trait PipelineObserver: Send + Sync {
    fn stage_started(&self, stage: Stage);
    fn stage_succeeded(&self, stage: Stage);
    fn stage_failed(&self, stage: Stage, error: &dyn Error);
}

/// Reports stage transitions through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn stage_started(&self, stage: Stage) {
        info!(%stage, "{}", stage.start_message());
    }

    fn stage_succeeded(&self, stage: Stage) {
        info!(%stage, "{}", stage.success_message());
    }

    fn stage_failed(&self, stage: Stage, error: &dyn Error) {
        error!(%stage, "Error occurred while {}: {}", stage.activity(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[traced_test]
    #[test]
    fn test_tracing_observer_logs_stage_lifecycle() {
        let observer = TracingObserver;
        observer.stage_started(Stage::Schema);
        observer.stage_succeeded(Stage::Schema);
        observer.stage_failed(Stage::Fetch, &Refused);

        assert!(logs_contain("Creating users table"));
        assert!(logs_contain("Created users table"));
        assert!(logs_contain(
            "Error occurred while fetching data from the API: connection refused"
        ));
    }

    #[traced_test]
    #[test]
    fn test_load_failure_message() {
        TracingObserver.stage_failed(Stage::Load, &Refused);
        assert!(logs_contain(
            "Error occurred while inserting data into users table: connection refused"
        ));
    }

    #[test]
    fn test_stage_names() {
        let names = Stage::ALL.iter().map(Stage::to_string).collect::<Vec<_>>();
        assert_eq!(names, vec!["fetch", "schema", "load", "verify"]);
    }
}
