//! Tool system for canvas interactions.
//!
//! Tools translate input events into [`GraphMutation`] values that are
//! applied by the [`crate::session::EditorSession`]. The only tool here is
//! the connect tool, which implements the click/selection protocol:
//!
//! - click on a node → select it
//! - click on a second, different node → connect the two, clear selection
//! - click on the selected node again → deselect (no self-loops)
//! - click on empty canvas → place a new node, clear selection

use crate::input::InputEvent;
use mst_core::NodeId;

/// A mutation of the graph, produced by a tool and applied by the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphMutation {
    AddNode { x: f32, y: f32 },
    AddEdge { a: NodeId, b: NodeId },
    UndoLastNode,
    Reset,
}

/// The active tool determines how input events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Connect,
}

/// Trait for tools that handle input and produce mutations.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle an input event, returning zero or more mutations.
    /// `hit_node` is the result of hit testing at the event position.
    fn handle(&mut self, event: &InputEvent, hit_node: Option<NodeId>) -> Vec<GraphMutation>;
}

// ─── Connect Tool ────────────────────────────────────────────────────────

/// Place points and connect pairs of them by consecutive clicks.
#[derive(Debug, Default)]
pub struct ConnectTool {
    /// The node picked by the first click of a connect gesture.
    selected: Option<NodeId>,
}

impl ConnectTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected node, for rendering highlights.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Drop any in-progress selection (on undo/reset).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

impl Tool for ConnectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Connect
    }

    fn handle(&mut self, event: &InputEvent, hit_node: Option<NodeId>) -> Vec<GraphMutation> {
        let InputEvent::PointerDown { x, y } = *event else {
            return vec![];
        };

        match (hit_node, self.selected) {
            // Second click on a different node: connect the pair
            (Some(hit), Some(sel)) if hit != sel => {
                self.selected = None;
                vec![GraphMutation::AddEdge { a: sel, b: hit }]
            }
            // Clicking the selected node again deselects it
            (Some(_), Some(_)) => {
                self.selected = None;
                vec![]
            }
            // First click on a node: select it
            (Some(hit), None) => {
                self.selected = Some(hit);
                vec![]
            }
            // Empty canvas: place a new node
            (None, _) => {
                self.selected = None;
                vec![GraphMutation::AddNode { x, y }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { x, y }
    }

    #[test]
    fn click_on_empty_canvas_places_a_node() {
        let mut tool = ConnectTool::new();
        let muts = tool.handle(&down(40.0, 60.0), None);
        assert_eq!(muts, vec![GraphMutation::AddNode { x: 40.0, y: 60.0 }]);
        assert_eq!(tool.selected(), None);
    }

    #[test]
    fn consecutive_clicks_on_two_nodes_connect_them() {
        let mut tool = ConnectTool::new();
        let a = NodeId(0);
        let b = NodeId(1);

        assert!(tool.handle(&down(0.0, 0.0), Some(a)).is_empty());
        assert_eq!(tool.selected(), Some(a));

        let muts = tool.handle(&down(50.0, 0.0), Some(b));
        assert_eq!(muts, vec![GraphMutation::AddEdge { a, b }]);
        assert_eq!(tool.selected(), None);
    }

    #[test]
    fn clicking_the_selected_node_deselects() {
        let mut tool = ConnectTool::new();
        let a = NodeId(3);
        tool.handle(&down(0.0, 0.0), Some(a));
        let muts = tool.handle(&down(1.0, 1.0), Some(a));
        assert!(muts.is_empty(), "no self-loop edge");
        assert_eq!(tool.selected(), None);
    }

    #[test]
    fn clicking_empty_canvas_clears_the_selection() {
        let mut tool = ConnectTool::new();
        tool.handle(&down(0.0, 0.0), Some(NodeId(0)));
        let muts = tool.handle(&down(200.0, 200.0), None);
        assert_eq!(
            muts,
            vec![GraphMutation::AddNode { x: 200.0, y: 200.0 }]
        );
        assert_eq!(tool.selected(), None);
    }

    #[test]
    fn pointer_up_is_ignored() {
        let mut tool = ConnectTool::new();
        let muts = tool.handle(&InputEvent::PointerUp { x: 0.0, y: 0.0 }, Some(NodeId(0)));
        assert!(muts.is_empty());
        assert_eq!(tool.selected(), None);
    }
}
