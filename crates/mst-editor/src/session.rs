//! The editor session: single owner of the graph store, the active tool,
//! and the animation scheduler.
//!
//! Every mutation flows through [`EditorSession::apply`] — never ad-hoc
//! field writes — and is gated on the run state: while the scheduler is
//! animating, graph edits are rejected so the engine's snapshot
//! assumptions cannot be pulled out from under a run in flight.

use crate::input::InputEvent;
use crate::tools::{ConnectTool, GraphMutation, Tool};
use mst_core::{AnimationScheduler, GraphStore, MstEngine, MstStep, NodeId, RunError};
use mst_render::{HIT_RADIUS, find_node_near};

/// Owns the interactive state of one canvas.
#[derive(Debug, Default)]
pub struct EditorSession {
    store: GraphStore,
    tool: ConnectTool,
    scheduler: AnimationScheduler,
    /// Raw text of the start-node input field.
    start_input: String,
    /// Last run rejection, shown as the canvas message. Cleared by a
    /// successful run start and by reset.
    message: Option<RunError>,
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with reproducible edge weights (tests, demos).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            store: GraphStore::with_seed(seed),
            ..Self::default()
        }
    }

    // ─── Pointer input ───────────────────────────────────────────────

    /// Feed a pointer-down at canvas coordinates. Returns `true` if the
    /// graph changed.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.handle_event(&InputEvent::PointerDown { x, y })
    }

    /// Feed a pointer-up. Returns `true` if the graph changed.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.handle_event(&InputEvent::PointerUp { x, y })
    }

    fn handle_event(&mut self, event: &InputEvent) -> bool {
        if self.scheduler.is_running() {
            log::debug!("ignoring {event:?}: run in progress");
            return false;
        }
        let hit = match *event {
            InputEvent::PointerDown { x, y } | InputEvent::PointerUp { x, y } => {
                find_node_near(self.store.nodes(), x, y, HIT_RADIUS)
            }
        };
        let mut changed = false;
        for mutation in self.tool.handle(event, hit) {
            changed |= self.apply(mutation);
        }
        changed
    }

    // ─── Mutations ───────────────────────────────────────────────────

    /// Apply one mutation. Rejected (with a log line, not an error) while
    /// a run is in progress. Returns `true` if the graph changed.
    pub fn apply(&mut self, mutation: GraphMutation) -> bool {
        if self.scheduler.is_running() {
            log::warn!("rejecting {mutation:?}: run in progress");
            return false;
        }
        match mutation {
            GraphMutation::AddNode { x, y } => {
                self.store.add_node(x, y);
                true
            }
            GraphMutation::AddEdge { a, b } => self.store.add_edge(a, b).is_some(),
            GraphMutation::UndoLastNode => match self.store.undo_last_node() {
                Some(removed) => {
                    if self.tool.selected() == Some(removed.id) {
                        self.tool.clear_selection();
                    }
                    true
                }
                None => false,
            },
            GraphMutation::Reset => {
                self.store.reset();
                self.tool.clear_selection();
                self.scheduler = AnimationScheduler::new();
                self.message = None;
                true
            }
        }
    }

    /// Remove the most-recently-added node (button binding).
    pub fn undo(&mut self) -> bool {
        self.apply(GraphMutation::UndoLastNode)
    }

    /// Clear the canvas, the MST result, and any message (button binding).
    pub fn reset(&mut self) -> bool {
        self.apply(GraphMutation::Reset)
    }

    // ─── Running the algorithm ───────────────────────────────────────

    /// Set the raw text of the start-node input field.
    pub fn set_start_input(&mut self, text: &str) {
        self.start_input = text.to_string();
    }

    /// Validate and start an animated run at host time `now_ms`.
    ///
    /// On success any prior message is cleared; on rejection the message
    /// is set to the rejection kind. A request while a run is already
    /// active is dropped without touching the message.
    pub fn run(&mut self, now_ms: f64) -> bool {
        // Non-numeric input takes the same rejection path as an unknown id.
        let start = self
            .start_input
            .trim()
            .parse::<u32>()
            .map_or(NodeId(u32::MAX), NodeId);

        match self.scheduler.start(&self.store, start, now_ms) {
            Ok(()) => {
                self.message = None;
                true
            }
            Err(RunError::RunInProgress) => {
                log::debug!("run request dropped: already running");
                false
            }
            Err(err) => {
                self.message = Some(err);
                false
            }
        }
    }

    /// Advance the animation; emits at most one step per call once the
    /// inter-step delay has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<MstStep> {
        self.scheduler.poll(now_ms)
    }

    // ─── Read-only view for rendering ────────────────────────────────

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// The engine's MST view: edges chosen so far, total weight, outcome.
    pub fn engine(&self) -> &MstEngine {
        self.scheduler.engine()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn total_weight(&self) -> u32 {
        self.scheduler.engine().total_weight()
    }

    /// Node highlighted as the pending first endpoint of a connect.
    pub fn selected(&self) -> Option<NodeId> {
        self.tool.selected()
    }

    /// Current canvas message, if any.
    pub fn message(&self) -> Option<RunError> {
        self.message
    }

    /// Whether to show the getting-started overlay (empty canvas).
    pub fn show_instructions(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn malformed_start_input_rejects_like_unknown_node() {
        let mut session = EditorSession::with_seed(1);
        session.pointer_down(50.0, 50.0);

        for input in ["", "abc", "-3", "1.5"] {
            session.set_start_input(input);
            assert!(!session.run(0.0), "input {input:?} should reject");
            assert_eq!(session.message(), Some(RunError::InvalidStartNode));
        }
    }

    #[test]
    fn successful_run_clears_the_message() {
        let mut session = EditorSession::with_seed(1);
        session.pointer_down(50.0, 50.0);

        session.set_start_input("9");
        session.run(0.0);
        assert!(session.message().is_some());

        session.set_start_input("0");
        assert!(session.run(0.0));
        assert_eq!(session.message(), None);
    }

    #[test]
    fn reset_clears_graph_result_and_message() {
        let mut session = EditorSession::with_seed(1);
        session.pointer_down(50.0, 50.0);
        session.set_start_input("0");
        assert!(session.run(0.0));
        while session.is_running() {
            session.poll(f64::MAX);
        }

        session.set_start_input("99");
        session.run(0.0);
        assert!(session.message().is_some());

        assert!(session.reset());
        assert!(session.show_instructions());
        assert_eq!(session.message(), None);
        assert_eq!(session.total_weight(), 0);
    }
}
