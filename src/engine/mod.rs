use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::analyzer::classify_depths;
use crate::analyzer::RateLimitedFetcher;
use crate::analyzer::RelationExplorer;
use crate::config::AnalyzerConfig;
use crate::config::Config;
use crate::err_with_loc;
use crate::ledger::HolderSource;
use crate::ledger::HttpLedgerClient;
use crate::ledger::TransferSource;
use crate::model::Address;
use crate::model::AnalysisReport;
use crate::Result;

/// Muraqib (مراقب): "The Watcher" — orchestrates whale-group analyses.
///
/// Owns the explorer (and through it the paced fetcher) plus the holder
/// source, enforces the wall-clock budget around traversals, and assembles
/// the serializable report.
pub struct Muraqib {
    explorer: RelationExplorer,
    holders: Arc<dyn HolderSource>,
    config: Arc<AnalyzerConfig>,
}

impl Muraqib {
    pub fn new(
        transfers: Arc<dyn TransferSource>,
        holders: Arc<dyn HolderSource>,
        config: &Config,
    ) -> Self {
        let analyzer_config = Arc::new(config.analyzer.clone());
        let fetcher = RateLimitedFetcher::new(
            transfers,
            Duration::from_millis(config.ledger.request_delay_ms),
            config.ledger.page_size,
        );

        Self {
            explorer: RelationExplorer::new(fetcher, analyzer_config.clone()),
            holders,
            config: analyzer_config,
        }
    }

    /// Wire both sources to one HTTP ledger client built from the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Arc::new(HttpLedgerClient::from_config(&config.ledger)?);
        Ok(Self::new(client.clone(), client, config))
    }

    /// Full relation graph for one wallet: depth-bounded traversal, depth
    /// classification, exchange labeling.
    pub async fn analyze_wallet(
        &self,
        root: &Address,
    ) -> AnalysisReport {
        info!("wallet_analysis_started::root::{}", root);

        let cancel = CancellationToken::new();
        let watchdog = spawn_budget_watchdog(cancel.clone(), Duration::from_secs(self.config.traversal_budget_secs));

        let graph = self
            .explorer
            .explore(root, self.config.min_transfer_amount, cancel)
            .await;
        watchdog.abort();

        let depth_map = classify_depths(&graph, root);
        AnalysisReport::new(
            vec![root.clone()],
            graph,
            Some(depth_map),
            self.explorer.call_count(),
        )
    }

    /// Shallow transaction graph over a token's top holders.
    ///
    /// Holder-source failure is fatal here: without seeds there is nothing
    /// to analyze.
    pub async fn analyze_token(
        &self,
        mint: &str,
    ) -> Result<AnalysisReport> {
        info!("token_analysis_started::mint::{}", mint);

        let holders = self
            .holders
            .top_holders(mint, self.config.top_holder_limit)
            .await
            .map_err(|e| err_with_loc!(e))?;

        if holders.is_empty() {
            warn!("no_holders_found::mint::{}", mint);
        }

        let seeds: Vec<Address> = holders.into_iter().map(|holder| holder.address).collect();
        let graph = self
            .explorer
            .transaction_graph(&seeds, self.config.min_transfer_amount)
            .await;

        Ok(AnalysisReport::new(seeds, graph, None, self.explorer.call_count()))
    }
}

fn spawn_budget_watchdog(
    cancel: CancellationToken,
    budget: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(budget).await;
        debug!("traversal_budget_elapsed::budget_secs::{}", budget.as_secs());
        cancel.cancel();
    })
}
