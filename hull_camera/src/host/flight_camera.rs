/// FlightCamera: the host's default camera.

use glam::{DVec3, Quat, Vec3};
use super::keys::VehicleKey;
use super::world::TransformRef;

/// Mutable access to the default (chase) camera.
///
/// The controller mutates it only while a view override is active.
pub trait FlightCamera {
    fn parent(&self) -> Option<TransformRef>;
    fn set_parent(&mut self, parent: Option<TransformRef>);

    fn local_position(&self) -> Vec3;
    fn set_local_position(&mut self, position: Vec3);

    fn local_rotation(&self) -> Quat;
    fn set_local_rotation(&mut self, rotation: Quat);

    /// Field of view (degrees)
    fn fov(&self) -> f32;
    /// Set the field of view through the host's own setter
    fn set_fov(&mut self, fov: f32);

    fn near_clip(&self) -> f32;
    fn set_near_clip(&mut self, clip: f32);

    /// Follow a vehicle, or stop following with `None`
    fn set_target(&mut self, target: Option<VehicleKey>);

    /// Free-floating placement: pivot the camera on a world position
    fn set_cam_coords_from_position(&mut self, position: DVec3);

    /// Distance from the pivot, applied without smoothing
    fn set_distance_immediate(&mut self, distance: f64);
}
