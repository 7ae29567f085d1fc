use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::Credentials;

/// Performs the single outbound call of a run.
///
/// Implementations must send exactly one request per `get` and hand back the
/// complete response body, or an error if the body could not be fully read.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, creds: &Credentials) -> Result<Vec<u8>, TransportError>;
}
