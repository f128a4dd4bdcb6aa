use std::collections::HashMap;

use serde::Serialize;

use super::address::Address;
use super::cex::Cex;
use super::graph::TransferGraph;

/// Serializable result of one analysis run, handed to the caller for
/// presentation or persistence. The core defines only this logical shape,
/// not a wire format.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub seeds: Vec<Address>,
    pub graph: TransferGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_map: Option<HashMap<Address, i64>>,
    pub call_count: u64,
    /// Graph addresses matching the known-exchange registry.
    pub known_entities: HashMap<Address, String>,
}

impl AnalysisReport {
    pub fn new(
        seeds: Vec<Address>,
        graph: TransferGraph,
        depth_map: Option<HashMap<Address, i64>>,
        call_count: u64,
    ) -> Self {
        let known_entities = label_known_entities(&graph);
        Self {
            seeds,
            graph,
            depth_map,
            call_count,
            known_entities,
        }
    }
}

fn label_known_entities(graph: &TransferGraph) -> HashMap<Address, String> {
    let mut labels = HashMap::new();
    for address in graph.addresses() {
        if let Some(name) = Cex::get_exchange_name(&address) {
            labels.insert(address, name.as_str().to_string());
        }
    }
    labels
}
