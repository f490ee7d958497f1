//! Stepwise Prim's algorithm as an explicit state machine.
//!
//! The engine validates its preconditions, snapshots the graph, and then
//! yields one [`MstStep`] per call to [`MstEngine::step`]. Timing lives
//! entirely in the caller (see [`crate::scheduler`]), which keeps the
//! algorithm independently testable by driving it to completion
//! synchronously.
//!
//! Each step re-scans the full edge list in insertion order and picks the
//! smallest-weight crossing edge; ties break by first occurrence in the
//! scan. No priority queue — O(nodes × edges) is a deliberate
//! simplicity-over-throughput choice for interactively built graphs, and
//! it makes the observable step sequence trivially deterministic.

use crate::connectivity::is_connected;
use crate::model::{Edge, GraphStore, Node, NodeId};
use std::collections::HashSet;
use thiserror::Error;

// ─── Outcomes & errors ───────────────────────────────────────────────────

/// Why a run was rejected. The `Display` strings for the first two kinds
/// are the exact messages shown on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The requested start id does not correspond to any current node.
    #[error("Please enter a valid starting node")]
    InvalidStartNode,
    /// The graph fails the connectivity check.
    #[error("All nodes must be connected to run Prim's Algorithm")]
    DisconnectedGraph,
    /// A run is already active; exactly one run may be in flight.
    #[error("a run is already in progress")]
    RunInProgress,
}

/// One algorithm step, emitted after an edge is absorbed into the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MstStep {
    /// The crossing edge chosen this iteration.
    pub edge: Edge,
    /// Sum of all chosen edge weights so far (monotonically non-decreasing).
    pub total_weight: u32,
    /// Node ids already included in the spanning tree, after this step.
    pub frontier: HashSet<NodeId>,
}

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Success { edges: Vec<Edge>, total_weight: u32 },
    Rejected(RunError),
}

/// Engine lifecycle. `Completed` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Validating,
    Running,
    Completed,
    Rejected,
}

// ─── Engine ──────────────────────────────────────────────────────────────

/// Stateful stepwise executor of Prim's algorithm.
///
/// `start` takes a private snapshot of the graph, so later edits to the
/// live [`GraphStore`] cannot invalidate the frontier or the edge scan of
/// a run already in flight.
#[derive(Debug, Default)]
pub struct MstEngine {
    state: EngineState,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    frontier: HashSet<NodeId>,
    mst_edges: Vec<Edge>,
    total_weight: u32,
    rejection: Option<RunError>,
}

impl MstEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate preconditions and begin a run from `start`.
    ///
    /// On rejection the previous results (`mst_edges`, `total_weight`)
    /// are left untouched and no snapshot is taken.
    pub fn start(&mut self, store: &GraphStore, start: NodeId) -> Result<(), RunError> {
        self.state = EngineState::Validating;

        if !store.contains(start) {
            return Err(self.reject(RunError::InvalidStartNode));
        }
        if !is_connected(store) {
            return Err(self.reject(RunError::DisconnectedGraph));
        }

        self.nodes = store.nodes().to_vec();
        self.edges = store.edges().to_vec();
        self.frontier = HashSet::from([start]);
        self.mst_edges.clear();
        self.total_weight = 0;
        self.rejection = None;
        self.state = EngineState::Running;
        log::debug!(
            "run started from node {start}: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        Ok(())
    }

    /// Advance by one iteration. Returns `None` once the engine is in a
    /// terminal state (including the transition into it).
    pub fn step(&mut self) -> Option<MstStep> {
        if self.state != EngineState::Running {
            return None;
        }
        if self.frontier.len() >= self.nodes.len() {
            self.state = EngineState::Completed;
            return None;
        }

        let chosen = self.cheapest_crossing_edge();
        let Some((edge, outside)) = chosen else {
            // Unreachable after a successful connectivity check; stop
            // silently rather than invent an error kind.
            log::warn!("no crossing edge mid-run; stopping early");
            self.state = EngineState::Completed;
            return None;
        };

        self.frontier.insert(outside);
        self.mst_edges.push(edge);
        self.total_weight += edge.weight;
        if self.frontier.len() == self.nodes.len() {
            self.state = EngineState::Completed;
            log::debug!(
                "run completed: {} edges, total weight {}",
                self.mst_edges.len(),
                self.total_weight
            );
        }

        Some(MstStep {
            edge,
            total_weight: self.total_weight,
            frontier: self.frontier.clone(),
        })
    }

    /// Drive the run synchronously to a terminal state, collecting every
    /// intermediate step.
    pub fn run_to_completion(&mut self) -> Vec<MstStep> {
        let mut steps = Vec::new();
        while let Some(step) = self.step() {
            steps.push(step);
        }
        steps
    }

    /// Scan the edge snapshot in insertion order for the smallest-weight
    /// edge with exactly one endpoint in the frontier. Strict `<` keeps
    /// the first occurrence on ties.
    fn cheapest_crossing_edge(&self) -> Option<(Edge, NodeId)> {
        let mut best: Option<(Edge, NodeId)> = None;
        for edge in &self.edges {
            let a_in = self.frontier.contains(&edge.a);
            let b_in = self.frontier.contains(&edge.b);
            if a_in == b_in {
                continue;
            }
            let outside = if a_in { edge.b } else { edge.a };
            if best.is_none_or(|(b, _)| edge.weight < b.weight) {
                best = Some((*edge, outside));
            }
        }
        best
    }

    fn reject(&mut self, err: RunError) -> RunError {
        log::debug!("run rejected: {err}");
        self.state = EngineState::Rejected;
        self.rejection = Some(err);
        err
    }

    // ─── Read-only view ──────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Edges chosen so far, in selection order.
    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// The terminal outcome, once one exists.
    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.state {
            EngineState::Completed => Some(RunOutcome::Success {
                edges: self.mst_edges.clone(),
                total_weight: self.total_weight,
            }),
            EngineState::Rejected => self.rejection.map(RunOutcome::Rejected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triangle() -> (GraphStore, NodeId) {
        let mut store = GraphStore::with_seed(1);
        let n0 = store.add_node(0.0, 0.0);
        let n1 = store.add_node(100.0, 0.0);
        let n2 = store.add_node(50.0, 80.0);
        store.add_edge_weighted(n0, n1, 5).unwrap();
        store.add_edge_weighted(n1, n2, 3).unwrap();
        store.add_edge_weighted(n0, n2, 10).unwrap();
        (store, n0)
    }

    #[test]
    fn unknown_start_node_rejects() {
        let (store, _) = triangle();
        let mut engine = MstEngine::new();
        assert_eq!(
            engine.start(&store, NodeId(99)),
            Err(RunError::InvalidStartNode)
        );
        assert_eq!(engine.state(), EngineState::Rejected);
        assert_eq!(
            engine.outcome(),
            Some(RunOutcome::Rejected(RunError::InvalidStartNode))
        );
    }

    #[test]
    fn single_node_completes_with_zero_steps() {
        let mut store = GraphStore::with_seed(1);
        let only = store.add_node(0.0, 0.0);
        let mut engine = MstEngine::new();
        engine.start(&store, only).unwrap();
        assert!(engine.run_to_completion().is_empty());
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.total_weight(), 0);
    }

    #[test]
    fn steps_grow_the_frontier_one_node_at_a_time() {
        let (store, start) = triangle();
        let mut engine = MstEngine::new();
        engine.start(&store, start).unwrap();

        let first = engine.step().unwrap();
        assert_eq!(first.frontier.len(), 2);
        let second = engine.step().unwrap();
        assert_eq!(second.frontier.len(), 3);
        assert!(engine.step().is_none());
        assert_eq!(engine.state(), EngineState::Completed);
    }

    #[test]
    fn tie_break_picks_first_occurrence_in_scan_order() {
        let mut store = GraphStore::with_seed(1);
        let n0 = store.add_node(0.0, 0.0);
        let n1 = store.add_node(1.0, 0.0);
        let n2 = store.add_node(2.0, 0.0);
        // Two weight-7 crossing edges from node 0; the earlier one wins.
        store.add_edge_weighted(n0, n1, 7).unwrap();
        store.add_edge_weighted(n0, n2, 7).unwrap();
        store.add_edge_weighted(n1, n2, 7).unwrap();

        let mut engine = MstEngine::new();
        engine.start(&store, n0).unwrap();
        let first = engine.step().unwrap();
        assert_eq!((first.edge.a, first.edge.b), (n0, n1));
    }

    #[test]
    fn snapshot_isolates_the_run_from_store_edits() {
        let (mut store, start) = triangle();
        let mut engine = MstEngine::new();
        engine.start(&store, start).unwrap();

        // Mutating the live store mid-run must not change the outcome.
        store.add_node(999.0, 999.0);
        store.reset();

        let steps = engine.run_to_completion();
        assert_eq!(steps.len(), 2);
        assert_eq!(engine.total_weight(), 8);
    }
}
