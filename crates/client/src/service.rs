//! The HTTP collaborator behind all feed operations.
//!
//! `Worksheet` and the feed types never talk to the network directly; they
//! go through a [`ServiceRequest`] handle injected at construction. The
//! default implementation is [`HttpService`], a thin reqwest wrapper.
//! Transport failures are surfaced unchanged; there is no retry layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::error::{ClientError, ClientResult};

/// HTTP collaborator consumed by the feed types.
#[async_trait]
pub trait ServiceRequest: Send + Sync {
    /// GET a URL and return the response body.
    async fn get(&self, url: &str) -> ClientResult<String>;

    /// DELETE a URL.
    async fn delete(&self, url: &str) -> ClientResult<()>;
}

/// reqwest-backed [`ServiceRequest`] implementation.
pub struct HttpService {
    client: Client,
    access_token: Option<String>,
}

impl HttpService {
    /// Constructs a service with a 30-second default timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if building the underlying HTTP client
    /// fails.
    pub fn new() -> ClientResult<Self> {
        Self::with_timeout(30)
    }

    /// Constructs a service with a custom per-request timeout in seconds.
    pub fn with_timeout(timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            client,
            access_token: None,
        })
    }

    /// Attach a bearer token sent with every request.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ServiceRequest for HttpService {
    async fn get(&self, url: &str) -> ClientResult<String> {
        tracing::debug!(url, "GET");

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        tracing::debug!(url, "DELETE");

        let response = self
            .authorize(self.client.delete(url))
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(())
    }
}
