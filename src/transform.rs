use crate::error::{EtlError, Result};
use crate::rates::ExchangeRateTable;
use crate::types::{BankRecord, EnrichedBankRecord};
use rust_decimal::Decimal;
use tracing::debug;

/// The derived columns are always exactly these three currencies. The set
/// is a literal contract, not a reflection of the rate table's contents:
/// extra table rows are ignored and a missing member fails the run.
const TARGET_CURRENCIES: [&str; 3] = ["GBP", "EUR", "INR"];

/// Converted amounts carry 2 fractional digits, rounded half-to-even.
const MONEY_SCALE: u32 = 2;

/// Pure, order-preserving per-row conversion of extracted records into
/// enriched ones. All required rates are resolved up front so a missing
/// currency fails before any row is converted.
pub fn convert(
    records: Vec<BankRecord>,
    rates: &ExchangeRateTable,
) -> Result<Vec<EnrichedBankRecord>> {
    let [gbp, eur, inr] = TARGET_CURRENCIES;
    let gbp_rate = rates.rate(gbp)?;
    let eur_rate = rates.rate(eur)?;
    let inr_rate = rates.rate(inr)?;

    let mut enriched = Vec::with_capacity(records.len());
    for record in records {
        let market_cap_usd = parse_market_cap(&record.market_cap)?;
        enriched.push(EnrichedBankRecord {
            name: record.name,
            market_cap_usd,
            market_cap_gbp: (market_cap_usd * gbp_rate).round_dp(MONEY_SCALE),
            market_cap_eur: (market_cap_usd * eur_rate).round_dp(MONEY_SCALE),
            market_cap_inr: (market_cap_usd * inr_rate).round_dp(MONEY_SCALE),
        });
    }

    debug!("Converted {} records", enriched.len());
    Ok(enriched)
}

fn parse_market_cap(raw: &str) -> Result<Decimal> {
    raw.parse().map_err(|_| EtlError::Format {
        value: raw.to_string(),
    })
}
