use crate::error::{EtlError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Rate")]
    rate: Decimal,
}

/// Currency-code to USD-multiplier mapping, loaded once per run and
/// read-only thereafter. The table may carry any number of currencies;
/// which of them are used is the converter's decision.
#[derive(Debug, Clone)]
pub struct ExchangeRateTable {
    rates: HashMap<String, Decimal>,
}

impl ExchangeRateTable {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rates = HashMap::new();
        for row in reader.deserialize() {
            let row: RateRow = row?;
            rates.insert(row.currency, row.rate);
        }
        debug!("Loaded {} exchange rates", rates.len());
        Ok(Self { rates })
    }

    /// Used by tests and callers that already hold rates in memory.
    pub fn from_rates(rates: HashMap<String, Decimal>) -> Self {
        Self { rates }
    }

    pub fn rate(&self, currency: &str) -> Result<Decimal> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| EtlError::MissingRate {
                currency: currency.to_string(),
            })
    }
}
