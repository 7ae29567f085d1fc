use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Represents HTTP Basic Authentication credentials for one request.
///
/// Built from a validated [`TaskConfig`](crate::config::TaskConfig) at the
/// start of a run and dropped once the request completes.
///
/// # Fields
///
/// * `username` - Sent as-is in the `Authorization` header.
/// * `password` - A secret string. It is only exposed while the header is
///   built and never shows up in `Debug` output or logs.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn expose(&self) -> (&str, &str) {
        (&self.username, self.password.expose_secret())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
