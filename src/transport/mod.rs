use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Raw response surfaced by the transport layer
///
/// The status is reported but does not gate parsing: the watch page and the
/// transcript endpoint both return useful bodies on non-2xx statuses, and a
/// missing page marker surfaces as a more specific error downstream.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

/// Minimal HTTP surface the fetchers need
///
/// Implementations own everything below the request line: TLS, pooling,
/// timeouts, proxies. The crate itself enforces no deadline and never
/// retries; supply a pre-configured client to impose either.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and return the status and raw body
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// POST a JSON body with `Content-Type: application/json`
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport over a default client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport over a caller-configured client
    ///
    /// This is the hook for timeouts, proxies and connection tuning.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
