//! Hit testing: point → node lookup.
//!
//! Decides whether a click lands on an existing node (and selects it) or
//! on empty canvas (and places a new one). Nodes are painted in insertion
//! order, so the scan runs back-to-front: the most recently added node
//! wins when several are within range.

use kurbo::Point;
use mst_core::{Node, NodeId};

/// Radius (canvas units) within which a click counts as hitting a node.
/// Matches the painted node radius.
pub const HIT_RADIUS: f64 = 20.0;

/// Find the topmost node within `radius` of `(x, y)`.
/// Returns `None` if the click lands on empty canvas.
pub fn find_node_near(nodes: &[Node], x: f32, y: f32, radius: f64) -> Option<NodeId> {
    let p = Point::new(f64::from(x), f64::from(y));
    let hit = nodes
        .iter()
        .rev()
        .find(|n| Point::new(f64::from(n.x), f64::from(n.y)).distance(p) < radius)
        .map(|n| n.id);
    log::trace!("hit test at ({x}, {y}): {hit:?}");
    hit
}
