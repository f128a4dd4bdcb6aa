use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Traversal depth budget; addresses at this depth are marked visited
    /// but never expanded.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Transfers below this decimal amount are ignored.
    pub min_transfer_amount: f64,
    /// Seed addresses taken from the holder list for a token analysis.
    #[serde(default = "default_top_holder_limit")]
    pub top_holder_limit: usize,
    /// Wall-clock budget for one traversal; the partial graph built so far
    /// is kept when the budget elapses.
    #[serde(default = "default_traversal_budget_secs")]
    pub traversal_budget_secs: u64,
}

fn default_max_depth() -> usize {
    2
}

fn default_top_holder_limit() -> usize {
    10
}

fn default_traversal_budget_secs() -> u64 {
    120
}
