use std::io::Write;

use tracing::info;

use crate::clients::{HttpTransport, Transport};
use crate::config::Settings;
use crate::error::TaskError;
use crate::utils::redact_url;

/// Runs one invocation of the fetch task: validate, request, emit.
///
/// There are no retries and no caching. A run either writes the whole
/// response body to `out` or fails without writing anything.
pub struct TaskRunner<T> {
    transport: T,
}

impl<T: Transport> TaskRunner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn run<W: Write>(&self, settings: Settings, out: &mut W) -> Result<(), TaskError> {
        let config = settings.validate()?;
        let url = config.api_url();

        let shown = redact_url(url);
        info!(url = %shown, "Fetching");
        let body = {
            let creds = config.credentials();
            self.transport
                .get(url, &creds)
                .await
                .map_err(|source| TaskError::Transport { url: shown, source })?
        };

        out.write_all(&body)?;
        out.flush()?;
        Ok(())
    }
}

/// Zero-argument entry point for the scheduler. Reads the environment, sends
/// the request over HTTP and writes the body to stdout.
pub async fn invoke() -> Result<(), TaskError> {
    let runner = TaskRunner::new(HttpTransport::new());
    runner.run(Settings::from_env(), &mut std::io::stdout()).await
}
