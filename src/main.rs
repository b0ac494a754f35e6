use std::process::ExitCode;

use anyhow::Result;
use taplog::cli::run_cli;
use tracing::error;

fn main() -> Result<ExitCode> {
    let code = run_cli().inspect_err(|e| {
        error!("Error running cli {e:?}");
    })?;
    Ok(code)
}
