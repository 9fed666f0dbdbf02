//! Visibility module: celestial occluders and line-of-sight tests.
//!
//! Remote viewing is only allowed when no celestial body blocks the
//! straight line between the active vehicle and the remote target.

mod celestial_body;
mod line_of_sight;

pub use celestial_body::CelestialBody;
pub use line_of_sight::{line_of_sight, closest_point_on_segment};
