use bank_etl::config::Config;
use bank_etl::fetch::HttpFetcher;
use bank_etl::logging;
use bank_etl::pipeline::Pipeline;
use bank_etl::query::run_query;
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "bank_etl")]
#[command(about = "Largest-banks market capitalization ETL")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full extract -> transform -> load -> query pipeline
    Run,
    /// Run an ad-hoc read query against the existing database
    Query {
        /// SQL to execute
        sql: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run => {
            println!("🚀 Running bank ETL pipeline...");
            let fetcher = HttpFetcher::new();
            let report = Pipeline::run(&config, &fetcher).await?;

            info!("Pipeline finished");
            println!("\n📊 Pipeline results:");
            println!("   Records loaded: {}", report.record_count);
            println!("   CSV output: {}", report.csv_path);
            println!("   Database: {}", report.db_path);
            for outcome in &report.query_results {
                println!("\n▶ {}", outcome.sql);
                print!("{}", outcome.table);
            }
        }
        Commands::Query { sql } => {
            let conn = Connection::open(&config.db_path)?;
            let table = run_query(&conn, &sql)?;
            print!("{table}");
        }
    }

    Ok(())
}
