//! payroll-ledger - Interactive console payroll ledger
//!
//! Reads menu selections and employee fields from stdin, keeps the records
//! in an in-memory ledger, and writes prompts and the payroll report to
//! stdout. Diagnostics go to stderr so the console transcript stays clean.

use std::io;
use std::process::ExitCode;

use tracing::error;

use payroll_ledger::config::ValidationConfig;
use payroll_ledger::console::ConsoleSession;
use payroll_ledger::error::PayrollResult;

/// Optional validation policy file, resolved in the working directory.
const CONFIG_PATH: &str = "payroll.yaml";

fn main() -> ExitCode {
    // Diagnostics default to warnings and stay off stdout; RUST_LOG opens
    // them up without touching the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}

fn run() -> PayrollResult<()> {
    let config = ValidationConfig::load_or_default(CONFIG_PATH)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), config);
    session.run()
}
