//! Core graph data model.
//!
//! The graph is a flat, insertion-ordered store: a node list and an edge
//! list. Node ids are dense integers assigned by insertion order, which is
//! what the renderer shows as labels and what the user types as the start
//! node. Edges are undirected and carry a random weight drawn once at
//! creation. Positions are opaque to the algorithms here — only hit testing
//! and rendering consume them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Smallest weight an edge can be assigned.
pub const WEIGHT_MIN: u32 = 1;
/// Largest weight an edge can be assigned.
pub const WEIGHT_MAX: u32 = 50;

// ─── Identifiers ─────────────────────────────────────────────────────────

/// A node identifier: dense, non-negative, assigned by insertion order.
///
/// Ids are never renumbered. Undo only removes the most-recently-added
/// node, so `node_count` always equals the next fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Nodes & Edges ───────────────────────────────────────────────────────

/// A placed point. `(x, y)` is in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
}

/// An undirected, weighted connection between two distinct nodes.
/// `(a, b)` and `(b, a)` are the same edge. The weight is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u32,
}

impl Edge {
    /// Whether `id` is one of this edge's endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint at all.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

// ─── GraphStore ──────────────────────────────────────────────────────────

/// Owns the node and edge sets and applies interactive mutations.
///
/// All edits go through the methods here; there is no ad-hoc field access
/// from the editor or renderer. The store also owns the RNG that draws
/// edge weights, so a seeded store replays identically.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    rng: SmallRng,
}

impl GraphStore {
    /// Create an empty store with an entropy-seeded weight RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an empty store with a fixed RNG seed (reproducible weights).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Append a node at `(x, y)`. The id is the current node count.
    pub fn add_node(&mut self, x: f32, y: f32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { id, x, y });
        log::debug!("added node {id} at ({x}, {y})");
        id
    }

    /// Append an undirected edge between `a` and `b` with a weight drawn
    /// uniformly from `[WEIGHT_MIN, WEIGHT_MAX]`.
    ///
    /// Returns `None` for a self-loop or a missing endpoint. Duplicate
    /// edges between the same pair are allowed.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Option<Edge> {
        let weight = self.rng.gen_range(WEIGHT_MIN..=WEIGHT_MAX);
        self.add_edge_weighted(a, b, weight)
    }

    /// Append an edge with an explicit weight. Same endpoint rules as
    /// [`add_edge`](Self::add_edge).
    pub fn add_edge_weighted(&mut self, a: NodeId, b: NodeId, weight: u32) -> Option<Edge> {
        if a == b {
            log::warn!("refusing self-loop edge on node {a}");
            return None;
        }
        if !self.contains(a) || !self.contains(b) {
            log::warn!("refusing edge ({a}, {b}): endpoint not in graph");
            return None;
        }
        let edge = Edge { a, b, weight };
        self.edges.push(edge);
        log::debug!("added edge ({a}, {b}) weight {weight}");
        Some(edge)
    }

    /// Remove the most-recently-added node and every edge touching it.
    /// No-op on an empty store. Remaining nodes keep their ids.
    pub fn undo_last_node(&mut self) -> Option<Node> {
        let node = self.nodes.pop()?;
        self.edges.retain(|e| !e.touches(node.id));
        log::debug!("removed node {} and its edges", node.id);
        Some(node)
    }

    /// Clear all nodes and edges.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    // ─── Read-only access ────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).filter(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn node_ids_follow_insertion_order() {
        let mut store = GraphStore::with_seed(1);
        assert_eq!(store.add_node(10.0, 10.0), NodeId(0));
        assert_eq!(store.add_node(20.0, 20.0), NodeId(1));
        assert_eq!(store.add_node(30.0, 30.0), NodeId(2));
        assert_eq!(store.node_count(), 3);
    }

    #[test]
    fn add_edge_rejects_self_loop_and_missing_endpoint() {
        let mut store = GraphStore::with_seed(1);
        let a = store.add_node(0.0, 0.0);
        assert!(store.add_edge(a, a).is_none());
        assert!(store.add_edge(a, NodeId(7)).is_none());
        assert!(store.edges().is_empty());
    }

    #[test]
    fn random_weights_stay_in_range() {
        let mut store = GraphStore::with_seed(42);
        let a = store.add_node(0.0, 0.0);
        let b = store.add_node(1.0, 1.0);
        for _ in 0..200 {
            let e = store.add_edge(a, b).unwrap();
            assert!((WEIGHT_MIN..=WEIGHT_MAX).contains(&e.weight), "weight {}", e.weight);
        }
    }

    #[test]
    fn duplicate_edges_may_coexist() {
        let mut store = GraphStore::with_seed(3);
        let a = store.add_node(0.0, 0.0);
        let b = store.add_node(1.0, 1.0);
        store.add_edge_weighted(a, b, 5).unwrap();
        store.add_edge_weighted(b, a, 9).unwrap();
        assert_eq!(store.edges().len(), 2);
    }

    #[test]
    fn undo_removes_last_node_and_its_edges() {
        let mut store = GraphStore::with_seed(1);
        let a = store.add_node(0.0, 0.0);
        let b = store.add_node(1.0, 0.0);
        let c = store.add_node(2.0, 0.0);
        store.add_edge_weighted(a, b, 3).unwrap();
        store.add_edge_weighted(b, c, 4).unwrap();
        store.add_edge_weighted(a, c, 5).unwrap();

        let removed = store.undo_last_node().unwrap();
        assert_eq!(removed.id, c);
        assert_eq!(store.node_count(), 2);
        // No remaining edge references the removed id
        assert!(store.edges().iter().all(|e| !e.touches(c)));
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn undo_on_empty_store_is_a_noop() {
        let mut store = GraphStore::with_seed(1);
        assert!(store.undo_last_node().is_none());
    }

    #[test]
    fn fresh_id_after_undo_equals_current_count() {
        let mut store = GraphStore::with_seed(1);
        store.add_node(0.0, 0.0);
        store.add_node(1.0, 0.0);
        store.undo_last_node();
        // The slot freed by undo is handed out again; only the tail is
        // ever removed, so ids stay unique within the live set.
        assert_eq!(store.add_node(5.0, 5.0), NodeId(1));
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = GraphStore::with_seed(1);
        let a = store.add_node(0.0, 0.0);
        let b = store.add_node(1.0, 0.0);
        store.add_edge_weighted(a, b, 2).unwrap();
        store.reset();
        assert!(store.is_empty());
        assert!(store.edges().is_empty());
        assert_eq!(store.add_node(0.0, 0.0), NodeId(0));
    }
}
