use crate::{env::EnvManager, error::CliError, settings::AppSettings, shutdown::ExitCode};
use connectors::{http::source::HttpUserSource, sql::postgres::session::PgSession};
use engine_core::{
    observer::TracingObserver,
    pipeline::{Pipeline, RunReport},
};
use std::{io, process};
use tracing::{error, info};

mod env;
mod error;
mod logging;
mod settings;
mod shutdown;

const DOTENV_PATH: &str = ".env";

#[tokio::main(flavor = "current_thread")]
async fn main() -> process::ExitCode {
    let settings = match configure() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("user-loader: {err}");
            return err.exit_code().into();
        }
    };

    info!("Starting script");

    match run(&settings).await {
        Ok(_) => {
            info!("Script execution completed");
            ExitCode::Success.into()
        }
        Err(err) => {
            error!("An unexpected error occurred: {err}");
            eprintln!("user-loader: {err}");
            err.exit_code().into()
        }
    }
}

/// Resolves settings from the environment and installs file logging.
fn configure() -> Result<AppSettings, CliError> {
    let mut env = EnvManager::from_process();
    env.load_dotenv(DOTENV_PATH)?;

    let settings = AppSettings::from_env(&env)?;
    logging::init(&settings.log)?;
    Ok(settings)
}

async fn run(settings: &AppSettings) -> Result<RunReport, CliError> {
    let source = HttpUserSource::new(&settings.api)?;
    let session = PgSession::connect(&settings.database).await?;
    let observer = TracingObserver;

    let outcome = {
        let pipeline = Pipeline::new(&source, &session, &observer);
        let mut stdout = io::stdout().lock();

        tokio::select! {
            result = pipeline.run(&mut stdout) => result.map_err(CliError::from),
            signal = shutdown::wait_for_signal() => Err(CliError::ShutdownRequested(signal)),
        }
    };

    // The session is released on every path, including interruption
    // mid-transaction, which makes the server roll the open load back.
    session.close().await;
    outcome
}
