/// SimCamera: recording stand-in for the host's default camera.

use glam::{DVec3, Quat, Vec3};
use crate::host::{FlightCamera, TransformRef, VehicleKey};

/// Host node the default camera hangs from before any override
pub const DEFAULT_CAMERA_PIVOT: TransformRef = TransformRef::Node(0);

/// Default camera with every field public for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct SimCamera {
    pub parent: Option<TransformRef>,
    pub local_position: Vec3,
    pub local_rotation: Quat,
    pub fov: f32,
    pub near_clip: f32,
    pub target: Option<VehicleKey>,
    /// Last free-floating pivot set by a remote view
    pub pivot: Option<DVec3>,
    pub distance: f64,
    /// Number of `set_fov` calls
    pub fov_writes: usize,
}

impl Default for SimCamera {
    fn default() -> Self {
        Self {
            parent: Some(DEFAULT_CAMERA_PIVOT),
            local_position: Vec3::new(0.0, 2.0, -10.0),
            local_rotation: Quat::IDENTITY,
            fov: 60.0,
            near_clip: 0.3,
            target: None,
            pivot: None,
            distance: 50.0,
            fov_writes: 0,
        }
    }
}

impl FlightCamera for SimCamera {
    fn parent(&self) -> Option<TransformRef> {
        self.parent.clone()
    }

    fn set_parent(&mut self, parent: Option<TransformRef>) {
        self.parent = parent;
    }

    fn local_position(&self) -> Vec3 {
        self.local_position
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.local_position = position;
    }

    fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.local_rotation = rotation;
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.fov_writes += 1;
    }

    fn near_clip(&self) -> f32 {
        self.near_clip
    }

    fn set_near_clip(&mut self, clip: f32) {
        self.near_clip = clip;
    }

    fn set_target(&mut self, target: Option<VehicleKey>) {
        self.target = target;
    }

    fn set_cam_coords_from_position(&mut self, position: DVec3) {
        self.pivot = Some(position);
    }

    fn set_distance_immediate(&mut self, distance: f64) {
        self.distance = distance;
    }
}
