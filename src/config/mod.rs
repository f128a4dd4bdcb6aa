pub mod analyzer;
pub mod ledger;
pub mod log;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use analyzer::AnalyzerConfig;
pub use ledger::LedgerApiConfig;
pub use log::LoggingConfig;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ledger: LedgerApiConfig,
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_str = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
