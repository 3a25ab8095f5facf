use crate::config::Config;
use crate::error::Result;
use crate::extract::extract_banks;
use crate::fetch::PageFetcher;
use crate::load::{load_to_db, write_csv};
use crate::query::run_query;
use crate::rates::ExchangeRateTable;
use crate::run_log::RunLog;
use crate::transform::convert;
use crate::types::QueryTable;
use rusqlite::Connection;
use tracing::{info, instrument};

/// One executed query and its tabular result.
#[derive(Debug)]
pub struct QueryOutcome {
    pub sql: String,
    pub table: QueryTable,
}

/// Result of a complete pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    pub record_count: usize,
    pub csv_path: String,
    pub db_path: String,
    pub query_results: Vec<QueryOutcome>,
}

pub struct Pipeline;

impl Pipeline {
    /// Runs the fixed extract -> transform -> load -> query sequence,
    /// appending a run-log line at each stage transition. Any stage
    /// failure aborts the remainder; output a previous stage already
    /// wrote is left as is.
    #[instrument(skip_all)]
    pub async fn run(config: &Config, fetcher: &dyn PageFetcher) -> Result<PipelineReport> {
        let run_log = RunLog::new(&config.run_log_path);
        run_log.append("Preliminaries complete. Initiating ETL process")?;

        info!("Fetching {}", config.source_url);
        let page = fetcher.fetch(&config.source_url).await?;
        let records = extract_banks(&page)?;
        info!("Extracted {} bank records", records.len());
        run_log.append("Data extraction complete. Initiating Transformation process")?;

        let rates = ExchangeRateTable::from_csv(&config.exchange_rate_path)?;
        let enriched = convert(records, &rates)?;
        info!("Converted {} records", enriched.len());
        run_log.append("Data transformation complete. Initiating Loading process")?;

        write_csv(&enriched, &config.csv_output_path)?;
        info!("Saved records to {}", config.csv_output_path);
        run_log.append("Data saved to CSV file")?;

        let mut conn = Connection::open(&config.db_path)?;
        load_to_db(&mut conn, &config.table_name, &enriched)?;
        info!("Loaded records into table {}", config.table_name);
        run_log.append("Data loaded to Database as a table, Executing queries")?;

        let mut query_results = Vec::new();
        for sql in Self::run_queries(&config.table_name) {
            let table = run_query(&conn, &sql)?;
            query_results.push(QueryOutcome { sql, table });
        }
        run_log.append("Process Complete")?;

        Ok(PipelineReport {
            record_count: enriched.len(),
            csv_path: config.csv_output_path.clone(),
            db_path: config.db_path.clone(),
            query_results,
        })
    }

    /// The three read queries every run executes, verbatim apart from the
    /// configured table name.
    fn run_queries(table: &str) -> [String; 3] {
        [
            format!("SELECT * FROM {table}"),
            format!("SELECT AVG(MC_GBP_Billion) FROM {table}"),
            format!("SELECT Bank FROM {table} LIMIT 5"),
        ]
    }
}
