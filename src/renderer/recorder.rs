//! Renderer that records draw calls instead of drawing

use serde::Serialize;

use super::{Color, Renderer};
use crate::Point;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Rect { min: Point, max: Point, color: Color },
    Marker { at: Point, radius: f64, color: Color },
    Segment { from: Point, to: Point, color: Color },
    Polygon { vertices: Vec<Point>, color: Color },
    Polyline { points: Vec<Point>, color: Color },
}

/// Collects draw calls for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand over everything recorded so far and start empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self, width: f64, height: f64) {
        // Earlier frames are gone once the surface is wiped
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_rect(&mut self, min: Point, max: Point, color: Color) {
        self.commands.push(DrawCommand::Rect { min, max, color });
    }

    fn marker(&mut self, at: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Marker { at, radius, color });
    }

    fn segment(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Segment { from, to, color });
    }

    fn polygon(&mut self, vertices: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn polyline(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut recorder = FrameRecorder::new();
        recorder.marker(Point::new(1.0, 1.0), 2.0, "black");
        recorder.clear(800.0, 600.0);
        assert_eq!(
            recorder.commands(),
            &[DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }]
        );
    }

    #[test]
    fn test_json_is_tagged() {
        let mut recorder = FrameRecorder::new();
        recorder.segment(Point::new(0.0, 0.0), Point::new(1.0, 2.0), "red");
        let json = recorder.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"op":"segment","from":[0.0,0.0],"to":[1.0,2.0],"color":"red"}]"#
        );

        assert_eq!(recorder.take().len(), 1);
        assert!(recorder.commands().is_empty());
    }
}
