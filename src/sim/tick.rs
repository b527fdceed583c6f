//! Per-frame sweep step
//!
//! One tick casts the ray at the current angle, advances the angle by the
//! configured step and records the hit height. The caller's scheduler asks for
//! another frame whenever the outcome says so.

use super::resolve::{Hit, nearest_hit};
use super::state::{PhaseChange, SweepPhase, SweepState, TickSample};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Ray was cast at `angle`; schedule the next tick
    Advanced { angle: f64, hit: Option<Hit> },
    /// Session is stopped; do not schedule again
    Halted,
}

impl TickOutcome {
    /// Whether the scheduler should call [`tick`] again next frame
    pub fn requests_next_frame(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Advance the sweep by one step
///
/// A stopped session is left untouched. Angles only ever increase, so
/// consecutive ticks sample consecutive angles.
pub fn tick(state: &mut SweepState) -> TickOutcome {
    if state.phase == SweepPhase::Stopped {
        return TickOutcome::Halted;
    }

    let angle = state.angle;
    let hit = nearest_hit(state.center(), angle, &state.polygon);

    state.angle += state.config.angle_step;
    state.time_ticks += 1;

    // Misses leave the chart where it was
    if let Some(hit) = hit {
        state.history.push_front(hit.point.y);
    }

    state.last_sample = Some(TickSample { angle, hit });
    TickOutcome::Advanced { angle, hit }
}

/// React to a polygon edit: re-arm a stopped sweep once it has enough vertices
pub fn on_polygon_changed(state: &mut SweepState) -> PhaseChange {
    state.arm()
}
