use crate::error::{ProxyError, Result};
use std::env;

pub const DEFAULT_UPSTREAM_URL: &str =
    "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search";

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let upstream_url = env::var("PROXY_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        if !upstream_url.starts_with("http://") && !upstream_url.starts_with("https://") {
            return Err(ProxyError::Config(format!(
                "Invalid PROXY_UPSTREAM_URL '{}'",
                upstream_url
            )));
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8888".to_string())
            .parse::<u16>()
            .map_err(|_| ProxyError::Config("Invalid PORT".to_string()))?;

        Ok(Self {
            upstream_url,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
