use crate::error::Result;
use crate::types::QueryTable;
use rusqlite::types::Value;
use rusqlite::Connection;
use tracing::debug;

/// Runs a read query and returns the result as ordered columns and rows.
/// Queries are literal, developer-supplied strings; nothing here is
/// exposed to untrusted input, so there is no sanitization layer.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryTable> {
    debug!("Running query: {}", sql);
    let mut statement = conn.prepare(sql)?;
    let columns: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    let mut results = statement.query([])?;
    while let Some(row) = results.next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            cells.push(row.get::<_, Value>(i)?);
        }
        rows.push(cells);
    }

    Ok(QueryTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_to_db;
    use crate::types::EnrichedBankRecord;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn ten_banks() -> Vec<EnrichedBankRecord> {
        (1..=10)
            .map(|i| EnrichedBankRecord {
                name: format!("Bank {i}"),
                market_cap_usd: dec("100.00") * Decimal::from(i),
                market_cap_gbp: dec("80.00") * Decimal::from(i),
                market_cap_eur: dec("93.00") * Decimal::from(i),
                market_cap_inr: dec("8295.00") * Decimal::from(i),
            })
            .collect()
    }

    fn loaded_connection() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        load_to_db(&mut conn, "Largest_banks", &ten_banks()).unwrap();
        conn
    }

    #[test]
    fn select_star_returns_all_rows_and_columns() {
        let conn = loaded_connection();

        let table = run_query(&conn, "SELECT * FROM Largest_banks").unwrap();

        assert_eq!(
            table.columns,
            [
                "index",
                "Bank",
                "Market_Cap",
                "MC_GBP_Billion",
                "MC_EUR_Billion",
                "MC_INR_Billion"
            ]
        );
        assert_eq!(table.rows.len(), 10);
    }

    #[test]
    fn limit_five_returns_first_rows_in_insertion_order() {
        let conn = loaded_connection();

        let table = run_query(&conn, "SELECT Bank FROM Largest_banks LIMIT 5").unwrap();

        let names: Vec<String> = table
            .rows
            .iter()
            .map(|row| match &row[0] {
                Value::Text(t) => t.clone(),
                other => panic!("expected text, got {other:?}"),
            })
            .collect();
        assert_eq!(names, ["Bank 1", "Bank 2", "Bank 3", "Bank 4", "Bank 5"]);
    }

    #[test]
    fn average_aggregates_the_real_column() {
        let conn = loaded_connection();

        let table = run_query(&conn, "SELECT AVG(MC_GBP_Billion) FROM Largest_banks").unwrap();

        assert_eq!(table.rows.len(), 1);
        // mean of 80, 160, ..., 800 is 440
        match table.rows[0][0] {
            Value::Real(avg) => assert!((avg - 440.0).abs() < 1e-9),
            ref other => panic!("expected real, got {other:?}"),
        }
    }

    #[test]
    fn malformed_sql_is_a_store_error() {
        let conn = loaded_connection();
        let result = run_query(&conn, "SELECT FROM WHERE");
        assert!(matches!(result, Err(crate::error::EtlError::Store(_))));
    }
}
