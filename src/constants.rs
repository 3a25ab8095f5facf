//! Default locations and names for a pipeline run. Every one of these can
//! be overridden through `Config`.

/// Archived snapshot of the Wikipedia list of largest banks. The archive
/// URL keeps extraction stable against live-page edits.
pub const SOURCE_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

pub const EXCHANGE_RATE_PATH: &str = "exchange_rate.csv";
pub const CSV_OUTPUT_PATH: &str = "top_10_banks.csv";
pub const DB_PATH: &str = "Banks.db";
pub const TABLE_NAME: &str = "Largest_banks";
pub const RUN_LOG_PATH: &str = "code_log.txt";

/// Optional configuration file consulted when no explicit path is given.
pub const CONFIG_PATH: &str = "config.toml";
