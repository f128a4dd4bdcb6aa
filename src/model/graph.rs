use std::collections::HashMap;
use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::Serialize;

use super::address::Address;
use super::transfer::TransferEdge;

/// Adjacency multimap from an origin address to its transfer edges.
///
/// Insertion order is traversal order, both within one origin's edge list and
/// across origins; the origin order is tracked explicitly so serialization
/// and depth classification stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct TransferGraph {
    edges: HashMap<Address, Vec<TransferEdge>>,
    origins: Vec<Address>,
}

impl TransferGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-append: creates the origin slot on first use.
    pub fn add_edge(
        &mut self,
        origin: Address,
        edge: TransferEdge,
    ) {
        match self.edges.get_mut(&origin) {
            Some(list) => list.push(edge),
            None => {
                self.origins.push(origin.clone());
                self.edges.insert(origin, vec![edge]);
            },
        }
    }

    /// Structural join of independently built partial graphs: edge lists are
    /// concatenated per origin in the order the parts are supplied.
    pub fn merge(parts: impl IntoIterator<Item = TransferGraph>) -> TransferGraph {
        let mut merged = TransferGraph::new();
        for part in parts {
            merged.absorb(part);
        }
        merged
    }

    pub fn absorb(
        &mut self,
        mut other: TransferGraph,
    ) {
        for origin in other.origins.drain(..) {
            if let Some(edges) = other.edges.remove(&origin) {
                for edge in edges {
                    self.add_edge(origin.clone(), edge);
                }
            }
        }
    }

    pub fn edges_from(
        &self,
        origin: &Address,
    ) -> &[TransferEdge] {
        self.edges.get(origin).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Origins with their edge lists, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &[TransferEdge])> {
        self.origins.iter().map(|origin| (origin, self.edges_from(origin)))
    }

    /// Every address appearing in the graph (origin or edge target), first
    /// appearance first.
    pub fn addresses(&self) -> Vec<Address> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for (origin, edges) in self.iter() {
            if seen.insert(origin.clone()) {
                ordered.push(origin.clone());
            }
            for edge in edges {
                if seen.insert(edge.to.clone()) {
                    ordered.push(edge.to.clone());
                }
            }
        }
        ordered
    }

    pub fn origin_count(&self) -> usize {
        self.origins.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl Serialize for TransferGraph {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.origins.len()))?;
        for (origin, edges) in self.iter() {
            map.serialize_entry(origin, edges)?;
        }
        map.end()
    }
}
