use crate::error::{RateError, Result};
use crate::models::PriceQueryResult;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeSet;

/// Mean of every advertisement price in a successful, non-empty result,
/// rounded to cents.
pub fn average_price(result: &PriceQueryResult) -> Result<f64> {
    if !result.success {
        return Err(RateError::UpstreamError {
            message: result
                .message
                .clone()
                .unwrap_or_else(|| "success flag is false".to_string()),
        });
    }

    let records = result.records();
    if records.is_empty() {
        return Err(RateError::UpstreamError {
            message: "advertisement list is empty".to_string(),
        });
    }

    let mut sum = 0.0;
    for record in records {
        let price = record
            .adv
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| RateError::InvalidPriceData {
                message: format!("Invalid price string '{}'", record.adv.price),
            })?;
        sum += price;
    }

    Ok(round_to_cents(sum / records.len() as f64))
}

/// Rounds the exact binary value to cents, ties away from zero, which is
/// what a browser's `toFixed(2)` does.
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Distinct payment method names across all advertisements, sorted.
pub fn payment_methods(result: &PriceQueryResult) -> Vec<String> {
    result
        .records()
        .iter()
        .flat_map(|record| record.adv.trade_methods.iter())
        .filter_map(|method| method.trade_method_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
