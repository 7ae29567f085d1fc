use thiserror::Error;

use crate::config::ConfigKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", join_keys(.0))]
    Missing(Vec<ConfigKey>),
}

impl ConfigError {
    /// Keys that failed validation, in check order.
    pub fn missing(&self) -> &[ConfigKey] {
        match self {
            ConfigError::Missing(keys) => keys,
        }
    }
}

fn join_keys(keys: &[ConfigKey]) -> String {
    keys.iter()
        .map(|k| k.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to emit response body: {0}")]
    Emit(#[from] std::io::Error),
}

impl TaskError {
    /// Process exit status reported to the scheduler (sysexits.h values).
    pub fn exit_code(&self) -> u8 {
        match self {
            TaskError::Config(_) => 78,
            TaskError::Transport { .. } => 69,
            TaskError::Emit(_) => 74,
        }
    }
}
