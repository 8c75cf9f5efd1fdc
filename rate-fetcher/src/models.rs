use crate::config::Config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CLASSIFIES: [&str; 3] = ["mass", "profession", "fiat_trade"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub const ALL: [TradeSide; 2] = [TradeSide::Buy, TradeSide::Sell];

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for the P2P advertisement search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub fiat: String,
    pub page: u32,
    pub rows: u32,
    pub trade_type: TradeSide,
    pub asset: String,
    pub countries: Vec<String>,
    pub pro_merchant_ads: bool,
    pub shield_merchant_ads: bool,
    pub filter_type: String,
    pub periods: Vec<String>,
    pub additional_kyc_verify_filter: u32,
    pub publisher_type: Option<String>,
    pub pay_types: Vec<String>,
    pub classifies: Vec<String>,
}

impl PriceQuery {
    pub fn for_side(config: &Config, side: TradeSide) -> Self {
        Self {
            fiat: config.fiat.clone(),
            page: config.page,
            rows: config.rows,
            trade_type: side,
            asset: config.asset.clone(),
            countries: config.countries.clone(),
            pro_merchant_ads: false,
            shield_merchant_ads: false,
            filter_type: "all".to_string(),
            periods: Vec::new(),
            additional_kyc_verify_filter: 0,
            publisher_type: None,
            pay_types: Vec::new(),
            classifies: CLASSIFIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceQueryResult {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<AdvRecord>>,
    #[serde(default)]
    pub total: Option<u64>,
    pub success: bool,
}

impl PriceQueryResult {
    pub fn records(&self) -> &[AdvRecord] {
        self.data.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvRecord {
    pub adv: Advertisement,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub price: String,
    #[serde(default)]
    pub trade_type: Option<String>,
    #[serde(default)]
    pub trade_methods: Vec<TradeMethod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeMethod {
    #[serde(default)]
    pub trade_method_name: Option<String>,
}

/// Outcome of one side's fetch. `average` is `None` whenever the fetch,
/// decode, parse or validation failed.
#[derive(Debug, Clone, Serialize)]
pub struct SideRate {
    pub side: TradeSide,
    pub average: Option<f64>,
    pub offers: usize,
    pub payment_methods: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl SideRate {
    pub fn absent(side: TradeSide) -> Self {
        Self {
            side,
            average: None,
            offers: 0,
            payment_methods: Vec::new(),
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RateSnapshot {
    pub buy: SideRate,
    pub sell: SideRate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_serializes_in_upstream_shape() {
        let query = PriceQuery::for_side(&Config::default(), TradeSide::Sell);
        let value = serde_json::to_value(&query).unwrap();

        assert_eq!(
            value,
            json!({
                "fiat": "BOB",
                "page": 1,
                "rows": 10,
                "tradeType": "SELL",
                "asset": "USDT",
                "countries": ["BO"],
                "proMerchantAds": false,
                "shieldMerchantAds": false,
                "filterType": "all",
                "periods": [],
                "additionalKycVerifyFilter": 0,
                "publisherType": null,
                "payTypes": [],
                "classifies": ["mass", "profession", "fiat_trade"]
            })
        );
    }

    #[test]
    fn queries_differ_only_in_trade_type() {
        let config = Config::default();
        let mut buy = serde_json::to_value(PriceQuery::for_side(&config, TradeSide::Buy)).unwrap();
        let mut sell = serde_json::to_value(PriceQuery::for_side(&config, TradeSide::Sell)).unwrap();
        buy["tradeType"] = json!(null);
        sell["tradeType"] = json!(null);
        assert_eq!(buy, sell);
    }

    #[test]
    fn result_tolerates_null_data() {
        let result: PriceQueryResult = serde_json::from_value(json!({
            "code": "000002",
            "message": "illegal parameter",
            "data": null,
            "total": 0,
            "success": false
        }))
        .unwrap();

        assert!(!result.success);
        assert!(result.records().is_empty());
        assert_eq!(result.message.as_deref(), Some("illegal parameter"));
    }

    #[test]
    fn result_reads_trade_methods() {
        let result: PriceQueryResult = serde_json::from_value(json!({
            "code": "000000",
            "message": null,
            "data": [{
                "adv": {
                    "price": "6.95",
                    "tradeType": "BUY",
                    "tradeMethods": [{ "tradeMethodName": "Banco Union" }]
                }
            }],
            "total": 1,
            "success": true
        }))
        .unwrap();

        let adv = &result.records()[0].adv;
        assert_eq!(adv.price, "6.95");
        assert_eq!(adv.trade_type.as_deref(), Some("BUY"));
        assert_eq!(adv.trade_methods[0].trade_method_name.as_deref(), Some("Banco Union"));
    }
}
