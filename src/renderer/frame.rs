//! Frame composition for the sweep page

use super::{HIT_RADIUS, Renderer, VERTEX_RADIUS, colors};
use crate::Point;
use crate::sim::{HistoryBuffer, SweepState};

/// Chart vertices: sample `i` (newest first) at `(offset.x + i, height + offset.y)`
pub fn chart_points(history: &HistoryBuffer, offset: Point) -> Vec<Point> {
    history
        .iter()
        .enumerate()
        .map(|(i, height)| Point::new(offset.x + i as f64, height + offset.y))
        .collect()
}

/// Scrolling height chart with the newest sample marked
pub fn draw_chart(renderer: &mut impl Renderer, history: &HistoryBuffer, offset: Point) {
    let points = chart_points(history, offset);
    let Some(&newest) = points.first() else {
        return;
    };
    renderer.marker(newest, HIT_RADIUS, colors::HIT);
    renderer.polyline(&points, colors::INK);
}

/// Draw the whole page for the current session state
///
/// Call after [`crate::sim::tick`] so the ray matches the sample just taken.
/// The ray and chart only appear while the sweep is running.
pub fn draw_frame(renderer: &mut impl Renderer, state: &SweepState) {
    let config = &state.config;
    renderer.clear(config.canvas_width as f64, config.canvas_height as f64);
    renderer.stroke_rect(config.region_min, config.region_max, colors::GUIDE);
    renderer.marker(state.center(), VERTEX_RADIUS, colors::INK);

    let vertices = state.polygon.vertices();
    if !vertices.is_empty() {
        renderer.polygon(vertices, colors::INK);
        for &vertex in vertices {
            renderer.marker(vertex, VERTEX_RADIUS, colors::INK);
        }
    }

    if !state.is_running() {
        return;
    }

    if let Some(hit) = state.last_sample.and_then(|sample| sample.hit) {
        renderer.marker(hit.point, HIT_RADIUS, colors::HIT);
        renderer.segment(state.center(), hit.point, colors::INK);
    }

    draw_chart(renderer, &state.history, config.chart_offset);
}
