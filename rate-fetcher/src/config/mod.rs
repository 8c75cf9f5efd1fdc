use crate::error::{RateError, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub fiat: String,
    pub asset: String,
    pub countries: Vec<String>,
    pub rows: u32,
    pub page: u32,
    pub user_agent: Option<String>,
    pub refresh_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fiat: "BOB".to_string(),
            asset: "USDT".to_string(),
            countries: vec!["BO".to_string()],
            rows: 10,
            page: 1,
            user_agent: None,
            refresh_interval_secs: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let fiat = parse_fiat(&env::var("RATE_FIAT").unwrap_or(defaults.fiat))?;

        let countries = match env::var("RATE_COUNTRIES") {
            Ok(raw) => parse_list(&raw),
            Err(_) => defaults.countries,
        };

        let rows = match env::var("RATE_ROWS") {
            Ok(raw) => parse_number::<u32>("RATE_ROWS", &raw)?,
            Err(_) => defaults.rows,
        };

        let page = match env::var("RATE_PAGE") {
            Ok(raw) => parse_number::<u32>("RATE_PAGE", &raw)?,
            Err(_) => defaults.page,
        };

        let refresh_interval_secs = match env::var("RATE_REFRESH_SECS") {
            Ok(raw) => parse_number::<u64>("RATE_REFRESH_SECS", &raw)?,
            Err(_) => defaults.refresh_interval_secs,
        };

        Ok(Self {
            api_url: env::var("RATE_API_URL").unwrap_or(defaults.api_url),
            fiat,
            asset: env::var("RATE_ASSET").unwrap_or(defaults.asset),
            countries,
            rows,
            page,
            user_agent: env::var("RATE_USER_AGENT").ok().filter(|ua| !ua.trim().is_empty()),
            refresh_interval_secs,
        })
    }
}

fn parse_fiat(raw: &str) -> Result<String> {
    let fiat = raw.trim().to_uppercase();
    if fiat.len() != 3 || !fiat.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RateError::ConfigError(format!(
            "Invalid RATE_FIAT '{}': expected a 3-letter currency code",
            raw
        )));
    }
    Ok(fiat)
}

fn parse_number<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| RateError::ConfigError(format!("Invalid {}", name)))
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
