/// Snapshot of the default camera taken before the first override.

use glam::{Quat, Vec3};
use crate::host::{FlightCamera, TransformRef};

/// Default camera fields to put back on restore.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCameraState {
    pub parent: Option<TransformRef>,
    pub local_position: Vec3,
    pub local_rotation: Quat,
    pub fov: f32,
    pub near_clip: f32,
}

impl SavedCameraState {
    /// Read the current default camera fields
    pub fn capture(camera: &dyn FlightCamera) -> Self {
        Self {
            parent: camera.parent(),
            local_position: camera.local_position(),
            local_rotation: camera.local_rotation(),
            fov: camera.fov(),
            near_clip: camera.near_clip(),
        }
    }

    /// Write the snapshot back. The parent goes first so the local
    /// position and rotation land in the original parent's space.
    pub fn apply(&self, camera: &mut dyn FlightCamera) {
        camera.set_parent(self.parent.clone());
        camera.set_local_position(self.local_position);
        camera.set_local_rotation(self.local_rotation);
        camera.set_near_clip(self.near_clip);
        camera.set_fov(self.fov);
    }
}
