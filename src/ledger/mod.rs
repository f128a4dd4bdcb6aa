pub mod http;

use async_trait::async_trait;

pub use http::HttpLedgerClient;

use crate::error::LedgerError;
use crate::model::Address;
use crate::model::FlowDirection;
use crate::model::TokenHolder;
use crate::model::TransferPage;

/// Page window for a transfer query. The traversal only ever consumes the
/// first record of the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn first(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
        }
    }
}

/// Ledger transfer source: largest qualifying transfers for one address and
/// flow direction, largest first.
#[async_trait]
pub trait TransferSource: Send + Sync {
    async fn largest_transfers(
        &self,
        address: &Address,
        direction: FlowDirection,
        min_amount: f64,
        page: PageRequest,
    ) -> Result<TransferPage, LedgerError>;
}

/// Holder source: ranked largest holders for a token mint.
#[async_trait]
pub trait HolderSource: Send + Sync {
    async fn top_holders(
        &self,
        mint: &str,
        limit: usize,
    ) -> Result<Vec<TokenHolder>, LedgerError>;
}
