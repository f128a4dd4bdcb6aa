use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tracing::debug;

use crate::error::LedgerError;
use crate::ledger::PageRequest;
use crate::ledger::TransferSource;
use crate::model::Address;
use crate::model::FlowDirection;
use crate::model::TransferPage;

/// Paces calls to the ledger transfer source with a fixed delay before each
/// request and counts them for telemetry.
///
/// The counter is advisory only; pacing correctness comes from the sleep,
/// never from the count. No retries happen here — a failed call propagates
/// and the traversal treats that branch as empty.
pub struct RateLimitedFetcher {
    source: Arc<dyn TransferSource>,
    delay: Duration,
    page_size: usize,
    calls: AtomicU64,
}

impl RateLimitedFetcher {
    pub fn new(
        source: Arc<dyn TransferSource>,
        delay: Duration,
        page_size: usize,
    ) -> Self {
        Self {
            source,
            delay,
            page_size,
            calls: AtomicU64::new(0),
        }
    }

    pub async fn call(
        &self,
        address: &Address,
        direction: FlowDirection,
        min_amount: f64,
    ) -> Result<TransferPage, LedgerError> {
        tokio::time::sleep(self.delay).await;
        let call_number = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("ledger_call::number::{}::address::{}::flow::{}", call_number, address, direction);

        self.source
            .largest_transfers(address, direction, min_amount, PageRequest::first(self.page_size))
            .await
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset at the start of each top-level traversal.
    pub fn reset_call_count(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}
