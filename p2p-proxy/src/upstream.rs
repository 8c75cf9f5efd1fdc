use crate::error::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Forwards JSON bodies to the fixed upstream search endpoint.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The upstream status is not inspected; whatever JSON comes back is
    /// handed to the caller.
    pub async fn forward(&self, body: &Value) -> Result<Value> {
        debug!("Forwarding request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;

        debug!("Upstream answered with status {}", response.status());
        Ok(response.json::<Value>().await?)
    }
}
