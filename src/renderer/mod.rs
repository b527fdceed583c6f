//! Drawing backends
//!
//! The sweep never draws directly. [`frame::draw_frame`] turns a session into
//! primitive calls on a [`Renderer`]; backends only know how to put those
//! primitives somewhere.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use frame::{chart_points, draw_chart, draw_frame};
pub use recorder::{DrawCommand, FrameRecorder};

use crate::Point;

/// CSS color string
pub type Color = &'static str;

/// Colors for sweep elements
pub mod colors {
    use super::Color;

    pub const INK: Color = "black";
    pub const GUIDE: Color = "#ccc";
    pub const HIT: Color = "red";
}

/// Marker sizes
pub const VERTEX_RADIUS: f64 = 2.0;
pub const HIT_RADIUS: f64 = 4.0;

/// Presentation-only drawing surface
pub trait Renderer {
    /// Wipe the whole surface
    fn clear(&mut self, width: f64, height: f64);
    /// Outline of an axis-aligned rectangle
    fn stroke_rect(&mut self, min: Point, max: Point, color: Color);
    /// Filled dot
    fn marker(&mut self, at: Point, radius: f64, color: Color);
    /// Straight line between two points
    fn segment(&mut self, from: Point, to: Point, color: Color);
    /// Closed outline through `vertices`
    fn polygon(&mut self, vertices: &[Point], color: Color);
    /// Open line through `points`
    fn polyline(&mut self, points: &[Point], color: Color);
}
