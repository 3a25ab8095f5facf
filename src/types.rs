use rusqlite::types::Value;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank as extracted from the source table: name plus the raw market-cap
/// cell text. Coercion to a number is the converter's job, so a malformed
/// cell fails the transform stage rather than extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub name: String,
    pub market_cap: String,
}

/// A bank with its market cap coerced to USD billions and converted into
/// each target currency, rounded to 2 fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBankRecord {
    pub name: String,
    pub market_cap_usd: Decimal,
    pub market_cap_gbp: Decimal,
    pub market_cap_eur: Decimal,
    pub market_cap_inr: Decimal,
}

/// Tabular result of a read query: ordered named columns, ordered rows.
#[derive(Debug, Clone)]
pub struct QueryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl fmt::Display for QueryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(format_value).collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => t.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
