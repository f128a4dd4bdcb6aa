#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use muraqib::config::AnalyzerConfig;
use muraqib::config::Config;
use muraqib::config::LedgerApiConfig;
use muraqib::config::LoggingConfig;
use muraqib::constants::SOL_DECIMALS;
use muraqib::error::LedgerError;
use muraqib::ledger::HolderSource;
use muraqib::ledger::PageRequest;
use muraqib::ledger::TransferSource;
use muraqib::model::Address;
use muraqib::model::FlowDirection;
use muraqib::model::RawTransfer;
use muraqib::model::TokenHolder;
use muraqib::model::TransferPage;
use muraqib::utils::sol_to_lamports;

/// Build a raw SOL transfer record; `amount_sol` is converted to lamports.
pub fn raw_transfer(
    from: &str,
    to: &str,
    amount_sol: f64,
    block_time: i64,
) -> RawTransfer {
    RawTransfer {
        from_address: from.to_string(),
        to_address: to.to_string(),
        amount: sol_to_lamports(amount_sol),
        token_decimals: SOL_DECIMALS,
        block_time,
    }
}

/// In-memory transfer source scripted per (address, direction), recording
/// every call it serves so tests can assert on traversal behavior.
#[derive(Default)]
pub struct ScriptedTransferSource {
    pages: HashMap<(Address, FlowDirection), Vec<RawTransfer>>,
    failures: HashSet<(Address, FlowDirection)>,
    calls: Mutex<Vec<(Address, FlowDirection)>>,
}

impl ScriptedTransferSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transfer(
        mut self,
        address: &str,
        direction: FlowDirection,
        record: RawTransfer,
    ) -> Self {
        self.pages
            .entry((Address::new(address), direction))
            .or_default()
            .push(record);
        self
    }

    pub fn with_failure(
        mut self,
        address: &str,
        direction: FlowDirection,
    ) -> Self {
        self.failures.insert((Address::new(address), direction));
        self
    }

    pub fn calls(&self) -> Vec<(Address, FlowDirection)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(
        &self,
        address: &str,
    ) -> usize {
        let address = Address::new(address);
        self.calls.lock().unwrap().iter().filter(|(a, _)| *a == address).count()
    }
}

#[async_trait]
impl TransferSource for ScriptedTransferSource {
    async fn largest_transfers(
        &self,
        address: &Address,
        direction: FlowDirection,
        _min_amount: f64,
        _page: PageRequest,
    ) -> Result<TransferPage, LedgerError> {
        self.calls.lock().unwrap().push((address.clone(), direction));

        if self.failures.contains(&(address.clone(), direction)) {
            return Err(LedgerError::Api {
                status: 500,
            });
        }

        let transfers = self
            .pages
            .get(&(address.clone(), direction))
            .cloned()
            .unwrap_or_default();
        Ok(TransferPage {
            transfers,
        })
    }
}

/// Holder source returning a fixed list.
pub struct StaticHolderSource {
    pub holders: Vec<TokenHolder>,
}

impl StaticHolderSource {
    pub fn new(addresses: &[&str]) -> Self {
        let holders = addresses
            .iter()
            .map(|address| TokenHolder {
                address: Address::new(*address),
                display_name: None,
                percent_of_supply: 1.0,
            })
            .collect();
        Self {
            holders,
        }
    }
}

#[async_trait]
impl HolderSource for StaticHolderSource {
    async fn top_holders(
        &self,
        _mint: &str,
        limit: usize,
    ) -> Result<Vec<TokenHolder>, LedgerError> {
        Ok(self.holders.iter().take(limit).cloned().collect())
    }
}

/// Config with no pacing delay so traversal tests run instantly.
pub fn test_config(
    min_transfer_amount: f64,
    max_depth: usize,
) -> Config {
    Config {
        ledger: LedgerApiConfig {
            base_url: "http://localhost:0".to_string(),
            api_key: Some("test-key".to_string()),
            request_delay_ms: 0,
            page_size: 10,
        },
        analyzer: AnalyzerConfig {
            max_depth,
            min_transfer_amount,
            top_holder_limit: 10,
            traversal_budget_secs: 30,
        },
        logging: LoggingConfig::default(),
    }
}
