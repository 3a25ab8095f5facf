use crate::constants;
use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Run configuration. Every field has a documented default, so the
/// pipeline runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page holding the largest-banks table.
    pub source_url: String,
    /// CSV with `Currency,Rate` columns; must contain GBP, EUR and INR.
    pub exchange_rate_path: String,
    /// Flat-file sink, overwritten each run.
    pub csv_output_path: String,
    /// SQLite database file.
    pub db_path: String,
    /// Table replaced wholesale on each run.
    pub table_name: String,
    /// Append-only stage-transition log.
    pub run_log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: constants::SOURCE_URL.to_string(),
            exchange_rate_path: constants::EXCHANGE_RATE_PATH.to_string(),
            csv_output_path: constants::CSV_OUTPUT_PATH.to_string(),
            db_path: constants::DB_PATH.to_string(),
            table_name: constants::TABLE_NAME.to_string(),
            run_log_path: constants::RUN_LOG_PATH.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration. An explicitly given path must exist; otherwise
    /// `config.toml` is read when present, and built-in defaults apply when
    /// it is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let fallback = Path::new(constants::CONFIG_PATH);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EtlError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
