//! Connectivity check: are all nodes mutually reachable?
//!
//! Pure function over the current graph — no caching, re-run fresh before
//! every algorithm run. The edge list is lifted into a petgraph `UnGraph`
//! and walked depth-first from an arbitrary node; traversal order does not
//! affect the answer.

use crate::model::GraphStore;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;
use std::collections::HashMap;

/// `true` iff every node is reachable from every other node.
///
/// An empty graph is not connected (there is no valid start node).
pub fn is_connected(store: &GraphStore) -> bool {
    if store.is_empty() {
        return false;
    }

    let mut graph: UnGraph<(), u32> = UnGraph::default();
    let mut index: HashMap<crate::model::NodeId, NodeIndex> =
        HashMap::with_capacity(store.node_count());
    for node in store.nodes() {
        index.insert(node.id, graph.add_node(()));
    }
    for edge in store.edges() {
        // Endpoints are guaranteed present by the store invariant.
        if let (Some(&a), Some(&b)) = (index.get(&edge.a), index.get(&edge.b)) {
            graph.add_edge(a, b, edge.weight);
        }
    }

    let start = index[&store.nodes()[0].id];
    let mut visited = 0usize;
    let mut dfs = Dfs::new(&graph, start);
    while dfs.next(&graph).is_some() {
        visited += 1;
    }
    visited == store.node_count()
}
