//! In-memory host simulation.
//!
//! A small world of vehicles, parts, and celestial bodies, plus a
//! recording default camera and notifier. Drives the controller the way a
//! game host would, without one.

mod sim_world;
mod sim_camera;
mod sim_host;

pub use sim_world::SimWorld;
pub use sim_camera::{SimCamera, DEFAULT_CAMERA_PIVOT};
pub use sim_host::{SimHost, SimNotifier, SimPartEvents, ScreenMessage};

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
