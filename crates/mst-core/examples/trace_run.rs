//! Headless run of the Prim engine: builds a small graph, runs the
//! algorithm to completion, and prints the step trace.
//!
//!     cargo run -p mst-core --example trace_run

use mst_core::{GraphStore, MstEngine, NodeId, RunOutcome};

fn main() {
    env_logger::init();

    let mut store = GraphStore::with_seed(2024);
    let ids: Vec<NodeId> = [
        (120.0, 80.0),
        (420.0, 120.0),
        (260.0, 300.0),
        (560.0, 340.0),
        (180.0, 460.0),
    ]
    .into_iter()
    .map(|(x, y)| store.add_node(x, y))
    .collect();

    for (i, j) in [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (3, 4)] {
        store.add_edge(ids[i], ids[j]).expect("endpoints exist");
    }

    println!("graph: {} nodes, {} edges", store.node_count(), store.edges().len());
    for e in store.edges() {
        println!("  ({}, {})  w={}", e.a, e.b, e.weight);
    }

    let mut engine = MstEngine::new();
    if let Err(err) = engine.start(&store, ids[0]) {
        eprintln!("rejected: {err}");
        return;
    }

    println!("\nPrim trace from node {}:", ids[0]);
    for (i, step) in engine.run_to_completion().iter().enumerate() {
        println!(
            "  step {}: ({}, {}) w={}  total={}  frontier={}",
            i + 1,
            step.edge.a,
            step.edge.b,
            step.edge.weight,
            step.total_weight,
            step.frontier.len()
        );
    }

    if let Some(RunOutcome::Success {
        edges,
        total_weight,
    }) = engine.outcome()
    {
        println!("\nMST: {} edges, total weight {total_weight}", edges.len());
    }
}
