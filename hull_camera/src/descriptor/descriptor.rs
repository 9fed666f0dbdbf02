/// Camera source descriptor: passive data attached to a vehicle part.
///
/// A descriptor describes one candidate viewpoint: where the camera sits
/// relative to its mount, which way it looks, and its lens settings.
/// The controller only reads descriptors; the host owns and persists them.

use glam::{Mat3, Quat, Vec3};
use crate::error::Result;
use crate::hullcam_bail;

const SOURCE: &str = "hullcam::Descriptor";

/// Runtime module identifiers for camera-carrying part modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Fixed-lens hull camera
    HullCamera,
    /// Hull camera with an adjustable field of view
    HullCameraZoom,
}

impl ModuleKind {
    /// Module name as it appears in live part modules and persisted snapshots
    pub fn module_name(&self) -> &'static str {
        match self {
            ModuleKind::HullCamera => "MuMechModuleHullCamera",
            ModuleKind::HullCameraZoom => "MuMechModuleHullCameraZoom",
        }
    }
}

/// Zoom range of a zoom-capable camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    /// Narrowest field of view (degrees)
    pub fov_min: f32,
    /// Widest field of view (degrees)
    pub fov_max: f32,
    /// Factor applied per zoom step (> 1)
    pub zoom_mult: f32,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            fov_min: 5.0,
            fov_max: 120.0,
            zoom_mult: 1.25,
        }
    }
}

impl ZoomRange {
    /// Clamp a field of view into this range
    pub fn clamp(&self, fov: f32) -> f32 {
        fov.clamp(self.fov_min, self.fov_max)
    }

    /// One step narrower, clamped
    pub fn zoom_in(&self, fov: f32) -> f32 {
        self.clamp(fov / self.zoom_mult)
    }

    /// One step wider, clamped
    pub fn zoom_out(&self, fov: f32) -> f32 {
        self.clamp(fov * self.zoom_mult)
    }

    /// Check bounds ordering and step factor.
    pub fn validate(&self) -> Result<()> {
        match self.problem() {
            Some(problem) => hullcam_bail!(SOURCE, InvalidDescriptor, "{}", problem),
            None => Ok(()),
        }
    }

    fn problem(&self) -> Option<String> {
        if !(self.fov_min.is_finite() && self.fov_max.is_finite()) {
            return Some(format!("zoom bounds must be finite ({}..{})", self.fov_min, self.fov_max));
        }
        if self.fov_min <= 0.0 || self.fov_max >= 180.0 || self.fov_min > self.fov_max {
            return Some(format!(
                "zoom bounds {}..{} must satisfy 0 < min <= max < 180", self.fov_min, self.fov_max));
        }
        if !self.zoom_mult.is_finite() || self.zoom_mult <= 1.0 {
            return Some(format!("zoom_mult must be > 1, got {}", self.zoom_mult));
        }
        None
    }
}

/// One camera source mounted on a part.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSourceDescriptor {
    /// Camera position in the mount transform's local space
    pub position: Vec3,
    /// Viewing direction in the mount transform's local space
    pub forward: Vec3,
    /// Up direction in the mount transform's local space
    pub up: Vec3,
    /// Named model transform to mount on; empty means the part root
    pub transform_name: String,
    /// Field of view (degrees)
    pub fov: f32,
    /// Near clip plane distance
    pub clip: f32,
    /// Display name
    pub name: String,
    /// Disabled cameras are skipped while cycling
    pub enabled: bool,
    /// Present only on zoom-capable cameras
    pub zoom: Option<ZoomRange>,
}

impl Default for CameraSourceDescriptor {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
            transform_name: String::new(),
            fov: 60.0,
            clip: 0.01,
            name: "Hull".to_string(),
            enabled: true,
            zoom: None,
        }
    }
}

impl CameraSourceDescriptor {
    /// Fixed-lens descriptor with the given name and defaults elsewhere
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: mount position and view direction
    pub fn with_pose(mut self, position: Vec3, forward: Vec3, up: Vec3) -> Self {
        self.position = position;
        self.forward = forward;
        self.up = up;
        self
    }

    /// Builder: named mount transform
    pub fn with_transform(mut self, transform_name: impl Into<String>) -> Self {
        self.transform_name = transform_name.into();
        self
    }

    /// Builder: lens settings
    pub fn with_lens(mut self, fov: f32, clip: f32) -> Self {
        self.fov = fov;
        self.clip = clip;
        self
    }

    /// Builder: make this a zoom camera
    pub fn with_zoom(mut self, zoom: ZoomRange) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Builder: enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Module kind this descriptor is exposed as
    pub fn module_kind(&self) -> ModuleKind {
        if self.zoom.is_some() {
            ModuleKind::HullCameraZoom
        } else {
            ModuleKind::HullCamera
        }
    }

    /// Mount transform name, if one is given
    pub fn mount_name(&self) -> Option<&str> {
        if self.transform_name.is_empty() {
            None
        } else {
            Some(self.transform_name.as_str())
        }
    }

    /// Local rotation looking along `forward` with `up` as the up hint.
    ///
    /// Left-handed look rotation: local +Z maps to `forward`.
    /// A zero `forward` yields identity; an `up` parallel to `forward`
    /// falls back to the shortest arc from +Z.
    pub fn orientation(&self) -> Quat {
        look_rotation(self.forward, self.up)
    }

    /// Check that the descriptor can drive a camera.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDescriptor` for non-finite vectors, zero-length
    /// forward/up, a field of view outside (0, 180), a non-positive clip
    /// distance, or an invalid zoom range.
    pub fn validate(&self) -> Result<()> {
        match self.problem() {
            Some(problem) => hullcam_bail!(SOURCE, InvalidDescriptor, "{}", problem),
            None => Ok(()),
        }
    }

    /// Same checks as `validate`, without logging
    pub fn is_valid(&self) -> bool {
        self.problem().is_none()
    }

    fn problem(&self) -> Option<String> {
        if !(self.position.is_finite() && self.forward.is_finite() && self.up.is_finite()) {
            return Some(format!("camera '{}' has non-finite pose vectors", self.name));
        }
        if self.forward.length_squared() <= f32::EPSILON || self.up.length_squared() <= f32::EPSILON {
            return Some(format!("camera '{}' forward/up vector has zero length", self.name));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Some(format!("camera '{}' fov {} outside (0, 180)", self.name, self.fov));
        }
        if !(self.clip > 0.0 && self.clip.is_finite()) {
            return Some(format!("camera '{}' clip {} must be positive", self.name, self.clip));
        }
        self.zoom.as_ref().and_then(ZoomRange::problem)
    }
}

fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(z) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    match up.cross(z).try_normalize() {
        Some(x) => {
            let y = z.cross(x);
            Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
        }
        None => Quat::from_rotation_arc(Vec3::Z, z),
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
