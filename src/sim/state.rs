//! Sweep session state
//!
//! One `SweepState` per canvas. It owns the polygon, the height history and
//! the rotation angle; event handlers and the tick loop mutate it strictly one
//! after the other, never concurrently.

use serde::{Deserialize, Serialize};

use super::history::HistoryBuffer;
use super::polygon::Polygon;
use super::resolve::Hit;
use crate::Point;
use crate::consts::MIN_ARM_VERTICES;
use crate::settings::SweepConfig;

/// Whether ticks are being scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepPhase {
    /// One tick per frame, each requesting the next
    Running,
    /// No ticks scheduled until the polygon is re-armed
    Stopped,
}

/// Phase transition caused by an external event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// Stopped -> Running; the caller must restart the frame loop
    Armed,
    /// Running -> Stopped
    Stopped,
    Unchanged,
}

/// What the latest tick sampled, kept for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    /// Angle the ray was cast at (degrees, before the step)
    pub angle: f64,
    pub hit: Option<Hit>,
}

/// Complete sweep session
#[derive(Debug, Clone)]
pub struct SweepState {
    pub config: SweepConfig,
    /// Angle the next tick samples (degrees, never wrapped)
    pub angle: f64,
    pub phase: SweepPhase,
    pub polygon: Polygon,
    pub history: HistoryBuffer,
    /// Number of ticks applied so far
    pub time_ticks: u64,
    /// Result of the most recent tick (cleared by reset)
    pub last_sample: Option<TickSample>,
}

impl SweepState {
    /// Start a session on the configured seed polygon
    ///
    /// Starts `Running` if the seed has enough vertices to arm, `Stopped`
    /// otherwise.
    pub fn new(config: SweepConfig) -> Self {
        let polygon = Polygon::from_points(config.seed_polygon.iter().copied());
        let phase = if polygon.len() >= MIN_ARM_VERTICES {
            SweepPhase::Running
        } else {
            SweepPhase::Stopped
        };

        log::info!(
            "Sweep session: {} seed vertices, starting at {}° ({:?})",
            polygon.len(),
            config.initial_angle,
            phase
        );

        Self {
            angle: config.initial_angle,
            phase,
            polygon,
            history: HistoryBuffer::with_capacity(config.history_capacity),
            time_ticks: 0,
            last_sample: None,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SweepPhase::Running
    }

    /// Ray origin
    pub fn center(&self) -> Point {
        self.config.center
    }

    /// Clear the polygon and history and stop ticking
    ///
    /// This is the stop transition. The angle is kept so a re-armed sweep
    /// continues where it left off.
    pub fn reset(&mut self) -> PhaseChange {
        let was_running = self.is_running();
        self.phase = SweepPhase::Stopped;
        self.polygon.clear();
        self.history.clear();
        self.last_sample = None;

        log::info!("Sweep reset at {}°", self.angle);
        if was_running {
            PhaseChange::Stopped
        } else {
            PhaseChange::Unchanged
        }
    }

    /// Append a vertex and re-arm if the polygon is now usable
    pub fn append_point(&mut self, point: Point) -> PhaseChange {
        self.polygon.append(point);
        super::tick::on_polygon_changed(self)
    }

    /// Handle a canvas click; `None` if it fell outside the drawing region
    pub fn click(&mut self, point: Point) -> Option<PhaseChange> {
        if !self.config.region_contains(point) {
            log::debug!("Ignoring click outside drawing region at {point}");
            return None;
        }
        Some(self.append_point(point))
    }

    /// Resume ticking from the held angle if stopped with enough vertices
    pub fn arm(&mut self) -> PhaseChange {
        if self.phase == SweepPhase::Stopped && self.polygon.len() >= MIN_ARM_VERTICES {
            self.phase = SweepPhase::Running;
            log::info!(
                "Sweep armed with {} vertices, resuming at {}°",
                self.polygon.len(),
                self.angle
            );
            PhaseChange::Armed
        } else {
            PhaseChange::Unchanged
        }
    }
}
