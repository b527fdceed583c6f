//! Canvas 2D backend (browser only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Renderer};
use crate::Point;

/// Draws straight onto a `<canvas>` 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`; `None` if the browser refuses one
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn trace(&self, points: &[Point]) {
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.x, first.y);
        }
        for p in iter {
            self.ctx.line_to(p.x, p.y);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_rect(&mut self, min: Point, max: Point, color: Color) {
        let size = max - min;
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.rect(min.x, min.y, size.x, size.y);
        self.ctx.stroke();
    }

    fn marker(&mut self, at: Point, radius: f64, color: Color) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        if let Err(err) = self.ctx.arc(at.x, at.y, radius, 0.0, TAU) {
            log::warn!("Marker at {at} not drawn: {err:?}");
            return;
        }
        self.ctx.fill();
    }

    fn segment(&mut self, from: Point, to: Point, color: Color) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.trace(&[from, to]);
        self.ctx.stroke();
    }

    fn polygon(&mut self, vertices: &[Point], color: Color) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.trace(vertices);
        self.ctx.close_path();
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Point], color: Color) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.trace(points);
        self.ctx.stroke();
    }
}
