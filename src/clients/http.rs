use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::clients::Transport;
use crate::error::TransportError;
use crate::models::Credentials;
use crate::utils::redact_url;

/// `reqwest` backed transport. Sends `GET` with HTTP Basic Authentication and
/// no other headers, query parameters or body.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, creds: &Credentials) -> Result<Vec<u8>, TransportError> {
        let (username, password) = creds.expose();

        // basic_auth marks the header value sensitive
        let response = self
            .client
            .get(url)
            .basic_auth(username, Some(password))
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let shown = redact_url(url);
        info!(url = %shown, status_code = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;
        info!(url = %shown, bytes = body.len(), "Response body read");

        Ok(body.to_vec())
    }
}
