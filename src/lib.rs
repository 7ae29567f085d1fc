//! Scheduled fetch task.
//!
//! One invocation reads `API_URL`, `USERNAME` and `PASSWORD`, issues a single
//! `GET` with HTTP Basic Authentication and writes the response body, unchanged,
//! to stdout.
//!
//! ```no_run
//! # async fn job() -> Result<(), rusty_fetch_runner::TaskError> {
//! rusty_fetch_runner::invoke().await
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;
pub mod utils;

pub use clients::{HttpTransport, Transport};
pub use config::{ConfigKey, Settings, TaskConfig};
pub use error::{ConfigError, TaskError, TransportError};
pub use models::Credentials;
pub use runner::{TaskRunner, invoke};
pub use utils::init_tracing;
