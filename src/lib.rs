//! Ray Sweep - a rotating ray probing a hand-drawn polygon
//!
//! Core modules:
//! - `sim`: Deterministic sweep (ray/edge intersection, nearest hit, tick loop)
//! - `renderer`: Renderer trait, frame composition, canvas and recording backends
//! - `settings`: Serializable sweep configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, SweepConfig};

use glam::DVec2;

/// Polygon vertices, ray origins and hits are all plain 2D points
pub type Point = DVec2;

/// Sweep configuration constants
pub mod consts {
    /// Ray origin on the canvas
    pub const CENTER: (f64, f64) = (100.0, 300.0);
    /// Angle of the first sampled ray (degrees)
    pub const INITIAL_ANGLE: f64 = 26.0;
    /// Rotation per tick (degrees)
    pub const ANGLE_STEP: f64 = 1.0;
    /// Smallest configurable rotation per tick (degrees)
    pub const MIN_ANGLE_STEP: f64 = 1e-6;
    /// Number of heights kept for the chart
    pub const HISTORY_CAPACITY: usize = 600;
    /// Largest configurable history
    pub const MAX_HISTORY_CAPACITY: usize = HISTORY_CAPACITY * 10;

    /// Vertices needed before the sweep (re)starts
    pub const MIN_ARM_VERTICES: usize = 3;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Region accepting new vertices (inclusive bounds)
    pub const REGION_MIN: (f64, f64) = (0.0, 200.0);
    pub const REGION_MAX: (f64, f64) = (200.0, 400.0);

    /// Where the chart's newest sample is plotted
    pub const CHART_OFFSET: (f64, f64) = (200.0, 0.0);

    /// Star-shaped polygon shown on first load
    pub const SEED_POLYGON: [(f64, f64); 12] = [
        (50.0, 200.0),
        (100.0, 290.0),
        (150.0, 200.0),
        (200.0, 250.0),
        (110.0, 300.0),
        (200.0, 350.0),
        (150.0, 400.0),
        (100.0, 310.0),
        (50.0, 400.0),
        (0.0, 350.0),
        (90.0, 300.0),
        (0.0, 250.0),
    ];
}

/// Unit direction of a ray at `degrees`
#[inline]
pub fn direction_from_degrees(degrees: f64) -> Point {
    let theta = degrees.to_radians();
    DVec2::new(theta.cos(), theta.sin())
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
