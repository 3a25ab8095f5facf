use crate::error::{EtlError, Result};
use crate::types::EnrichedBankRecord;
use rusqlite::{params, Connection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;
use tracing::debug;

/// Output column set shared by both sinks. The leading header cell is
/// empty: it sits over the row-index column.
const COLUMNS: [&str; 6] = [
    "",
    "Bank",
    "Market_Cap",
    "MC_GBP_Billion",
    "MC_EUR_Billion",
    "MC_INR_Billion",
];

/// Writes the full record sequence to a flat file at `path`, overwriting
/// any previous run's output.
pub fn write_csv<P: AsRef<Path>>(records: &[EnrichedBankRecord], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for (index, record) in records.iter().enumerate() {
        writer.write_record([
            index.to_string(),
            record.name.clone(),
            record.market_cap_usd.to_string(),
            record.market_cap_gbp.to_string(),
            record.market_cap_eur.to_string(),
            record.market_cap_inr.to_string(),
        ])?;
    }
    writer.flush()?;
    debug!("Wrote {} records to CSV", records.len());
    Ok(())
}

/// Replaces `table` wholesale with the full record sequence, inside one
/// transaction. Rerunning the load leaves exactly the new contents; there
/// are no upsert or partial-update semantics.
pub fn load_to_db(
    conn: &mut Connection,
    table: &str,
    records: &[EnrichedBankRecord],
) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS "{table}";
        CREATE TABLE "{table}" (
            "index"         INTEGER,
            Bank            TEXT,
            Market_Cap      REAL,
            MC_GBP_Billion  REAL,
            MC_EUR_Billion  REAL,
            MC_INR_Billion  REAL
        );
        "#
    ))?;
    {
        let mut insert = tx.prepare(&format!(
            r#"INSERT INTO "{table}" ("index", Bank, Market_Cap, MC_GBP_Billion, MC_EUR_Billion, MC_INR_Billion)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#
        ))?;
        for (index, record) in records.iter().enumerate() {
            insert.execute(params![
                index as i64,
                record.name,
                to_real(record.market_cap_usd)?,
                to_real(record.market_cap_gbp)?,
                to_real(record.market_cap_eur)?,
                to_real(record.market_cap_inr)?,
            ])?;
        }
    }
    tx.commit()?;
    debug!("Loaded {} records into table {}", records.len(), table);
    Ok(())
}

fn to_real(value: Decimal) -> Result<f64> {
    value.to_f64().ok_or_else(|| EtlError::Format {
        value: value.to_string(),
    })
}
