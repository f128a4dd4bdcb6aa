use serde::Deserialize;
use serde::Serialize;

use crate::constants::API_KEY_ENV;
use crate::constants::DEFAULT_LEDGER_API_URL;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Falls back to the MURAQIB_API_KEY environment variable when absent.
    pub api_key: Option<String>,
    /// Fixed delay enforced before every ledger call.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl LedgerApiConfig {
    /// Resolve the API credential; absence in both config and environment is
    /// fatal at startup.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey(API_KEY_ENV)),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_LEDGER_API_URL.to_string()
}

fn default_request_delay_ms() -> u64 {
    100
}

fn default_page_size() -> usize {
    10
}
