//! User-drawn polygon with implicit closure
//!
//! Vertices are appended one click at a time. Edge `i` always joins vertex `i`
//! to vertex `(i + 1) % n`, so `n` vertices give `n` edges, the last one closing
//! the loop. Fewer than two vertices give no edges at all.

use serde::{Deserialize, Serialize};

use crate::Point;

/// One side of the polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Position in edge order (equals the index of `start`)
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

/// Ordered vertex list, closed implicitly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: points.into_iter().collect(),
        }
    }

    /// Append a vertex after the current last one
    pub fn append(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Remove every vertex
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterate edges in vertex order, including the closing edge
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            vertices: &self.vertices,
            index: 0,
        }
    }
}

/// Iterator over a polygon's edges, see [`Polygon::edges`]
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    vertices: &'a [Point],
    index: usize,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.vertices.len();
        if n < 2 || self.index >= n {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(Edge {
            index,
            start: self.vertices[index],
            end: self.vertices[(index + 1) % n],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.vertices.len();
        let remaining = if n < 2 { 0 } else { n - self.index };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}
