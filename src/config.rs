use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use tracing::error;

use crate::error::ConfigError;
use crate::models::Credentials;

/// The three settings a run needs, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    ApiUrl,
    Username,
    Password,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::ApiUrl, ConfigKey::Username, ConfigKey::Password];

    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigKey::ApiUrl => "API_URL",
            ConfigKey::Username => "USERNAME",
            ConfigKey::Password => "PASSWORD",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Raw settings as found at invocation time. Any of them may be absent.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl Settings {
    /// Reads `API_URL`, `USERNAME` and `PASSWORD` from the process environment.
    /// Called once per invocation; nothing is cached between runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: ConfigKey| lookup(key.env_var()).filter(|v| !v.is_empty());
        Self {
            api_url: get(ConfigKey::ApiUrl),
            username: get(ConfigKey::Username),
            password: get(ConfigKey::Password).map(SecretString::from),
        }
    }

    /// Checks every key and reports all of the missing ones, not just the first.
    pub fn validate(self) -> Result<TaskConfig, ConfigError> {
        let Settings {
            api_url,
            username,
            password,
        } = self;

        let api_url = api_url.filter(|v| !v.is_empty());
        let username = username.filter(|v| !v.is_empty());
        let password = password.filter(|v| !v.expose_secret().is_empty());

        let mut missing = Vec::new();
        for key in ConfigKey::ALL {
            let present = match key {
                ConfigKey::ApiUrl => api_url.is_some(),
                ConfigKey::Username => username.is_some(),
                ConfigKey::Password => password.is_some(),
            };
            if !present {
                error!(variable = key.env_var(), "{:?} environment variable not found", key.env_var());
                missing.push(key);
            }
        }

        match (api_url, username, password) {
            (Some(api_url), Some(username), Some(password)) if missing.is_empty() => Ok(TaskConfig {
                api_url,
                username,
                password,
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

/// Validated configuration: every value is present and non-empty.
#[derive(Clone, Debug)]
pub struct TaskConfig {
    api_url: String,
    username: String,
    password: SecretString,
}

impl TaskConfig {
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// A fresh credentials value for a single request.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
