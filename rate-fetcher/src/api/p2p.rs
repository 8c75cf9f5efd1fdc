use crate::config::Config;
use crate::decode::decode_body;
use crate::error::{RateError, Result};
use crate::models::{PriceQuery, PriceQueryResult, TradeSide};
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

#[derive(Clone)]
pub struct P2pClient {
    client: Client,
    config: Config,
}

impl P2pClient {
    pub fn new(config: Config) -> Result<Self> {
        // Bodies are inflated by `decode_body`, never by the client.
        let mut builder = Client::builder().no_gzip();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Posts the side's query and returns the body exactly as received.
    pub async fn fetch_raw(&self, side: TradeSide) -> Result<Vec<u8>> {
        let query = PriceQuery::for_side(&self.config, side);

        debug!("Fetching {} advertisements from {}", side, self.config.api_url);

        let response = self
            .client
            .post(&self.config.api_url)
            .header(ACCEPT, "application/json")
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RateError::ApiError {
                status: response.status().as_u16(),
                message: format!("P2P API returned status: {}", response.status()),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    pub async fn fetch_result(&self, side: TradeSide) -> Result<PriceQueryResult> {
        let raw = self.fetch_raw(side).await?;
        let text = decode_body(&raw)?;

        serde_json::from_str(&text).map_err(|e| {
            debug!("P2P raw {} response: {}", side, text);
            RateError::JsonError(e)
        })
    }
}
