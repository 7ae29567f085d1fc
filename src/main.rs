use std::process::ExitCode;

use rusty_fetch_runner::{TaskError, init_tracing, invoke};
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match invoke().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            let is_config = matches!(e, TaskError::Config(_));
            let err = anyhow::Error::from(e);
            // each missing key was already reported at error level
            if is_config {
                debug!(exit_code = code, "Task failed: {err:#}");
            } else {
                error!(exit_code = code, "Task failed: {err:#}");
            }
            ExitCode::from(code)
        }
    }
}
