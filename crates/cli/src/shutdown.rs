use std::{fmt, future};
use tokio::signal;
use tracing::{info, warn};

/// A termination request delivered by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Interrupt => f.write_str("SIGINT"),
            Signal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Resolves when SIGINT or SIGTERM arrives.
///
/// A handler that cannot be installed is logged and never resolves, so the
/// run continues without that signal source.
pub async fn wait_for_signal() -> Signal {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => Signal::Interrupt,
            Err(err) => {
                warn!(%err, "Failed to install SIGINT handler");
                future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                Signal::Terminate
            }
            Err(err) => {
                warn!(%err, "Failed to install SIGTERM handler");
                future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<Signal>();

    let signal = tokio::select! {
        signal = ctrl_c => signal,
        signal = terminate => signal,
    };
    info!("Received {signal}, aborting the run");
    signal
}

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    ShutdownRequested = 130, // Standard exit code for SIGINT
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_i32() as u8)
    }
}
