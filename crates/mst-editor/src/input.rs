//! Pointer input events, already translated to canvas-local coordinates.
//!
//! The host (WASM bridge, tests) owns raw event plumbing; tools only see
//! these.

/// A pointer event in canvas-local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
}
