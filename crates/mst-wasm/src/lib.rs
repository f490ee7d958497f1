//! WASM bridge for MST Canvas — exposes the graph editor and the animated
//! Prim run to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host forwards pointer
//! events in canvas-local coordinates, calls `poll` from its frame loop
//! (the bridge hands the timestamp through; all cadence logic lives in
//! `mst-core`), and re-renders whenever a call reports a change.

mod render2d;

use mst_core::{Edge, Node};
use mst_editor::EditorSession;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Holds the editor session (graph store + click protocol + scheduler).
/// All interaction from the host JS goes through this struct.
#[wasm_bindgen]
pub struct MstCanvas {
    session: EditorSession,
    width: f64,
    height: f64,
    /// Dark mode flag — `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl MstCanvas {
    /// Create a new canvas controller with the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();

        Self {
            session: EditorSession::new(),
            width,
            height,
            dark_mode: false,
        }
    }

    // ─── Pointer input ───────────────────────────────────────────────

    /// Handle pointer down at canvas coordinates. Returns true if the
    /// graph changed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.session.pointer_down(x, y)
    }

    /// Handle pointer up. Returns true if the graph changed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.session.pointer_up(x, y)
    }

    // ─── Controls ────────────────────────────────────────────────────

    /// Set the raw text of the start-node input field.
    pub fn set_start_node(&mut self, text: &str) {
        self.session.set_start_input(text);
    }

    /// Validate and start an animated run at host time `now_ms`
    /// (e.g. `performance.now()`). Returns true if the run started.
    pub fn run(&mut self, now_ms: f64) -> bool {
        self.session.run(now_ms)
    }

    /// Advance the animation. Returns true if a new MST edge was revealed
    /// (the host should re-render).
    pub fn poll(&mut self, now_ms: f64) -> bool {
        self.session.poll(now_ms).is_some()
    }

    /// [`run`](Self::run) with the JS wall clock, for hosts that don't
    /// thread timestamps through.
    pub fn run_now(&mut self) -> bool {
        self.session.run(js_sys::Date::now())
    }

    /// [`poll`](Self::poll) with the JS wall clock.
    pub fn poll_now(&mut self) -> bool {
        self.session.poll(js_sys::Date::now()).is_some()
    }

    /// Remove the most-recently-added node and its edges.
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// Clear the canvas, the MST result, and any message.
    pub fn reset(&mut self) -> bool {
        self.session.reset()
    }

    // ─── State for the host UI ───────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Total weight of the MST edges revealed so far.
    pub fn total_weight(&self) -> u32 {
        self.session.total_weight()
    }

    /// Current user-facing message ("Please enter a valid starting
    /// node", ...), or `None`.
    pub fn message(&self) -> Option<String> {
        self.session.message().map(|m| m.to_string())
    }

    /// Whether to show the getting-started overlay (empty canvas).
    pub fn show_instructions(&self) -> bool {
        self.session.show_instructions()
    }

    pub fn node_count(&self) -> u32 {
        self.session.store().node_count() as u32
    }

    /// The full graph + MST state as JSON, for hosts that render
    /// themselves instead of calling [`render`](Self::render).
    pub fn snapshot_json(&self) -> String {
        let snapshot = Snapshot {
            nodes: self.session.store().nodes(),
            edges: self.session.store().edges(),
            mst_edges: self.session.engine().mst_edges(),
            total_weight: self.session.total_weight(),
            is_running: self.session.is_running(),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    // ─── Rendering ───────────────────────────────────────────────────

    /// Render the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = if self.dark_mode {
            render2d::CanvasTheme::dark()
        } else {
            render2d::CanvasTheme::light()
        };
        render2d::render_scene(
            ctx,
            self.session.store(),
            self.session.engine().mst_edges(),
            self.session.selected(),
            self.session.is_running(),
            self.width,
            self.height,
            &theme,
        );
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Resize the canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

/// JSON shape handed to hosts via [`MstCanvas::snapshot_json`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    mst_edges: &'a [Edge],
    total_weight: u32,
    is_running: bool,
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("MST WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
