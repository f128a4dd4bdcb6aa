use std::collections::HashSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::fetcher::RateLimitedFetcher;
use super::normalize::normalize;
use crate::config::AnalyzerConfig;
use crate::model::Address;
use crate::model::FlowDirection;
use crate::model::NormalizedTransfer;
use crate::model::TransactionKey;
use crate::model::TransferGraph;
use crate::utils::format_block_time;

/// Per-traversal bookkeeping, exclusively owned by one top-level invocation.
///
/// `visited` guards against re-expanding an address (and so against cycles);
/// `seen_keys` guards against recording the same physical transfer twice when
/// it is reached via different paths into the same pair of addresses.
#[derive(Debug, Default)]
pub struct TraversalContext {
    visited: HashSet<Address>,
    seen_keys: HashSet<TransactionKey>,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the address was already expanded.
    pub fn mark_visited(
        &mut self,
        address: &Address,
    ) -> bool {
        self.visited.insert(address.clone())
    }

    /// Returns false if the key was already recorded.
    pub fn record_key(
        &mut self,
        key: TransactionKey,
    ) -> bool {
        self.seen_keys.insert(key)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Depth-bounded traversal over the most significant counterparty chain.
///
/// Each expanded address contributes at most one inbound and one outbound
/// edge (the single largest qualifying transfer per direction); the
/// counterparties of accepted edges are scheduled one level deeper. The walk
/// is iterative over a LIFO work stack, so the depth budget rather than the
/// call stack bounds it and cancellation has a single loop boundary to land
/// on.
pub struct RelationExplorer {
    fetcher: RateLimitedFetcher,
    config: Arc<AnalyzerConfig>,
}

impl RelationExplorer {
    pub fn new(
        fetcher: RateLimitedFetcher,
        config: Arc<AnalyzerConfig>,
    ) -> Self {
        Self {
            fetcher,
            config,
        }
    }

    pub fn call_count(&self) -> u64 {
        self.fetcher.call_count()
    }

    /// Build the relation graph rooted at `root`.
    ///
    /// Never fails: ledger errors are absorbed per (address, direction) and
    /// an empty graph is a valid outcome. Cancelling the token stops the walk
    /// at the next loop iteration and the partial graph is returned.
    pub async fn explore(
        &self,
        root: &Address,
        min_amount: f64,
        cancel: CancellationToken,
    ) -> TransferGraph {
        self.fetcher.reset_call_count();

        let mut graph = TransferGraph::new();
        if root.is_empty() {
            warn!("empty_root_address::traversal_skipped");
            return graph;
        }

        let mut ctx = TraversalContext::new();
        let mut stack: Vec<(Address, usize)> = vec![(root.clone(), 0)];

        while let Some((address, depth)) = stack.pop() {
            if cancel.is_cancelled() {
                warn!("traversal_cancelled::root::{}::visited::{}", root, ctx.visited_count());
                break;
            }
            if !ctx.mark_visited(&address) {
                continue;
            }
            // Depth-boundary addresses are marked visited but never expanded
            if depth >= self.config.max_depth {
                debug!("depth_budget_exhausted::address::{}::depth::{}", address, depth);
                continue;
            }

            let inbound = self.fetch_top_transfer(&address, FlowDirection::In, min_amount).await;
            let outbound = self.fetch_top_transfer(&address, FlowDirection::Out, min_amount).await;

            let next_in = inbound.and_then(|transfer| Self::admit(&mut graph, &mut ctx, transfer, min_amount));
            let next_out = outbound.and_then(|transfer| Self::admit(&mut graph, &mut ctx, transfer, min_amount));

            // LIFO: push the outbound counterparty first so the inbound
            // branch is explored first
            if let Some(counterparty) = next_out {
                stack.push((counterparty, depth + 1));
            }
            if let Some(counterparty) = next_in {
                stack.push((counterparty, depth + 1));
            }
        }

        info!(
            "traversal_completed::root::{}::visited::{}::edges::{}::calls::{}",
            root,
            ctx.visited_count(),
            graph.edge_count(),
            self.fetcher.call_count()
        );
        graph
    }

    /// Shallow transaction graph over a batch of seed addresses: one
    /// single-hop lookup per seed, fanned out concurrently, merged once all
    /// lookups resolve. Each lookup owns its own mini-session, so duplicate
    /// transfers may survive across independent sub-graphs.
    pub async fn transaction_graph(
        &self,
        seeds: &[Address],
        min_amount: f64,
    ) -> TransferGraph {
        self.fetcher.reset_call_count();

        let lookups = seeds.iter().map(|seed| self.single_hop(seed, min_amount));
        let partials = futures::future::join_all(lookups).await;

        let graph = TransferGraph::merge(partials);
        info!(
            "transaction_graph_completed::seeds::{}::edges::{}::calls::{}",
            seeds.len(),
            graph.edge_count(),
            self.fetcher.call_count()
        );
        graph
    }

    async fn single_hop(
        &self,
        address: &Address,
        min_amount: f64,
    ) -> TransferGraph {
        let mut graph = TransferGraph::new();
        let mut ctx = TraversalContext::new();

        for direction in [FlowDirection::In, FlowDirection::Out] {
            if let Some(transfer) = self.fetch_top_transfer(address, direction, min_amount).await {
                Self::admit(&mut graph, &mut ctx, transfer, min_amount);
            }
        }
        graph
    }

    /// The single largest qualifying transfer for one direction, or None.
    ///
    /// Ledger failures and malformed records both collapse to None here:
    /// the branch is treated as "no qualifying transfer found" and the
    /// traversal carries on.
    async fn fetch_top_transfer(
        &self,
        address: &Address,
        direction: FlowDirection,
        min_amount: f64,
    ) -> Option<NormalizedTransfer> {
        let page = match self.fetcher.call(address, direction, min_amount).await {
            Ok(page) => page,
            Err(e) => {
                warn!("transfer_fetch_failed::address::{}::flow::{}::error::{}", address, direction, e);
                return None;
            },
        };

        // Only the top transfer per direction is modeled
        let record = page.transfers.into_iter().next()?;

        match normalize(&record, direction) {
            Ok(transfer) => Some(transfer),
            Err(e) => {
                warn!("transfer_record_malformed::address::{}::flow::{}::error::{}", address, direction, e);
                None
            },
        }
    }

    /// Apply the amount filter and the transaction-key guard; on acceptance
    /// the edge lands under its origin and the counterparty is returned for
    /// scheduling.
    fn admit(
        graph: &mut TransferGraph,
        ctx: &mut TraversalContext,
        transfer: NormalizedTransfer,
        min_amount: f64,
    ) -> Option<Address> {
        if transfer.amount < min_amount {
            debug!(
                "transfer_below_minimum::from::{}::to::{}::amount::{}",
                transfer.from, transfer.to, transfer.amount
            );
            return None;
        }
        if !ctx.record_key(transfer.key()) {
            debug!(
                "transfer_already_recorded::from::{}::to::{}::block_time::{}",
                transfer.from, transfer.to, transfer.block_time
            );
            return None;
        }

        debug!(
            "edge_recorded::from::{}::to::{}::amount::{}::time::{}",
            transfer.from,
            transfer.to,
            transfer.amount,
            format_block_time(transfer.block_time)
        );
        let counterparty = transfer.counterparty().clone();
        let origin = transfer.from.clone();
        graph.add_edge(origin, transfer.into_edge());
        Some(counterparty)
    }
}
