//! Camera controller: the view state machine.
//!
//! The controller is an owned value held by the host's tick loop: create it
//! when flight starts, call `update` every frame, forward the destruction
//! and scene-change callbacks, and `shutdown` it when flight ends.

mod active_view;
mod saved_state;
mod camera_controller;

pub use active_view::{ActiveView, CameraState};
pub use saved_state::SavedCameraState;
pub use camera_controller::CameraController;
