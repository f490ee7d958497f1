//! Canvas2D renderer.
//!
//! Pure paint: walks the read-only graph snapshot and the MST view and
//! draws to an HTML `<canvas>` via `CanvasRenderingContext2d`. No
//! algorithmic logic lives here.

use mst_core::{Edge, GraphStore, NodeId};
use mst_render::HIT_RADIUS;
use web_sys::CanvasRenderingContext2d;

/// Painted node radius; matches the hit-test radius.
const NODE_RADIUS: f64 = HIT_RADIUS;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub edge: &'static str,
    pub edge_label: &'static str,
    pub mst_edge: &'static str,
    pub node_fill: &'static str,
    pub node_fill_selected: &'static str,
    pub node_stroke: &'static str,
    pub node_label: &'static str,
}

impl CanvasTheme {
    /// Light theme — warm white canvas.
    pub fn light() -> Self {
        Self {
            bg: "#F5F5F7",
            edge: "#D03030",
            edge_label: "#1C1C1E",
            mst_edge: "#1F9D55",
            node_fill: "#1C1C1E",
            node_fill_selected: "#7D4CDB",
            node_stroke: "#FFFFFF",
            node_label: "#FFFFFF",
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            edge: "#E06060",
            edge_label: "#E5E5EA",
            mst_edge: "#34C759",
            node_fill: "#E5E5EA",
            node_fill_selected: "#BF8CFF",
            node_stroke: "#1C1C1E",
            node_label: "#1C1C1E",
        }
    }
}

/// Render the whole scene: every edge with its weight label, the MST found
/// so far on top (thicker while the animation is live), then the nodes.
pub fn render_scene(
    ctx: &CanvasRenderingContext2d,
    store: &GraphStore,
    mst_edges: &[Edge],
    selected: Option<NodeId>,
    is_running: bool,
    canvas_width: f64,
    canvas_height: f64,
    theme: &CanvasTheme,
) {
    // Clear canvas
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    for edge in store.edges() {
        draw_edge(ctx, store, edge, theme.edge, 2.0);
        draw_weight_label(ctx, store, edge, theme);
    }

    let mst_width = if is_running { 5.0 } else { 3.0 };
    for edge in mst_edges {
        draw_edge(ctx, store, edge, theme.mst_edge, mst_width);
    }

    for node in store.nodes() {
        draw_node(ctx, node.x, node.y, node.id, selected == Some(node.id), theme);
    }
}

fn endpoints(store: &GraphStore, edge: &Edge) -> Option<(f64, f64, f64, f64)> {
    let a = store.node(edge.a)?;
    let b = store.node(edge.b)?;
    Some((a.x as f64, a.y as f64, b.x as f64, b.y as f64))
}

fn draw_edge(
    ctx: &CanvasRenderingContext2d,
    store: &GraphStore,
    edge: &Edge,
    color: &str,
    width: f64,
) {
    let Some((x1, y1, x2, y2)) = endpoints(store, edge) else {
        return;
    };
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

fn draw_weight_label(
    ctx: &CanvasRenderingContext2d,
    store: &GraphStore,
    edge: &Edge,
    theme: &CanvasTheme,
) {
    let Some((x1, y1, x2, y2)) = endpoints(store, edge) else {
        return;
    };
    let mx = (x1 + x2) / 2.0;
    let my = (y1 + y2) / 2.0;
    ctx.set_fill_style_str(theme.edge_label);
    ctx.set_font("16px Arial, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(&edge.weight.to_string(), mx, my);
}

fn draw_node(
    ctx: &CanvasRenderingContext2d,
    x: f32,
    y: f32,
    id: NodeId,
    is_selected: bool,
    theme: &CanvasTheme,
) {
    let cx = x as f64;
    let cy = y as f64;

    ctx.begin_path();
    let _ = ctx.arc(cx, cy, NODE_RADIUS, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(if is_selected {
        theme.node_fill_selected
    } else {
        theme.node_fill
    });
    ctx.fill();
    ctx.set_stroke_style_str(theme.node_stroke);
    ctx.set_line_width(3.0);
    ctx.stroke();

    ctx.set_fill_style_str(theme.node_label);
    ctx.set_font("14px Arial, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(&id.to_string(), cx, cy);
}
