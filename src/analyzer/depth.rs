use std::collections::HashMap;
use std::collections::VecDeque;

use tracing::debug;

use crate::model::Address;
use crate::model::TransferGraph;

/// Assign each address reachable from `root` a signed depth for layered
/// reporting: senders sit upstream of the root (positive), recipients
/// downstream (negative), root = 0.
///
/// Money flows origin -> target along every edge, so the relation is always
/// `depth[origin] = depth[target] + 1`. The labeling is a breadth-first
/// relabeling over the completed graph: first assignment wins in BFS order,
/// which together with the graph's explicit insertion order makes the result
/// deterministic. Addresses with no connection to the root stay unlabeled.
pub fn classify_depths(
    graph: &TransferGraph,
    root: &Address,
) -> HashMap<Address, i64> {
    // Undirected adjacency carrying the signed step toward each neighbor
    let mut adjacency: HashMap<&Address, Vec<(&Address, i64)>> = HashMap::new();
    for (origin, edges) in graph.iter() {
        for edge in edges {
            adjacency.entry(origin).or_default().push((&edge.to, -1));
            adjacency.entry(&edge.to).or_default().push((origin, 1));
        }
    }

    let mut depths: HashMap<Address, i64> = HashMap::new();
    depths.insert(root.clone(), 0);

    let mut queue: VecDeque<Address> = VecDeque::new();
    queue.push_back(root.clone());

    while let Some(address) = queue.pop_front() {
        let base = depths[&address];
        let Some(neighbors) = adjacency.get(&address) else {
            continue;
        };
        for (neighbor, step) in neighbors {
            if !depths.contains_key(*neighbor) {
                depths.insert((*neighbor).clone(), base + step);
                queue.push_back((*neighbor).clone());
            }
        }
    }

    debug!("depth_classification_completed::root::{}::labeled::{}", root, depths.len());
    depths
}
