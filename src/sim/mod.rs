//! Deterministic sweep simulation
//!
//! All geometry and animation state lives here. This module must stay pure:
//! - Fixed angle step only
//! - Stable edge iteration order
//! - No rendering or platform dependencies

pub mod history;
pub mod intersect;
pub mod polygon;
pub mod resolve;
pub mod state;
pub mod tick;

pub use history::HistoryBuffer;
pub use intersect::{Rejection, intersect, intersect_with_reason};
pub use polygon::{Edge, Polygon};
pub use resolve::{Hit, all_hits, nearest_hit, nearest_intersection};
pub use state::{PhaseChange, SweepPhase, SweepState, TickSample};
pub use tick::{TickOutcome, on_polygon_changed, tick};
