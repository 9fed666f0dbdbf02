/// Active view: which camera source currently drives the default camera.

use crate::host::{CameraRef, PartKey, VehicleKey};

/// The current view. At most one source is bound at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Default camera in effect
    #[default]
    None,
    /// Viewing through a descriptor on the active vehicle
    Local { camera: CameraRef },
    /// Viewing an unloaded vehicle from a fixed standoff
    Remote { vehicle: VehicleKey },
}

impl ActiveView {
    pub fn is_default(&self) -> bool {
        matches!(self, ActiveView::None)
    }

    pub fn local_camera(&self) -> Option<CameraRef> {
        match self {
            ActiveView::Local { camera } => Some(*camera),
            _ => None,
        }
    }

    /// Owning part of the bound local descriptor
    pub fn local_part(&self) -> Option<PartKey> {
        self.local_camera().map(|camera| camera.part)
    }

    pub fn remote_vehicle(&self) -> Option<VehicleKey> {
        match self {
            ActiveView::Remote { vehicle } => Some(*vehicle),
            _ => None,
        }
    }

    pub fn state(&self) -> CameraState {
        match self {
            ActiveView::None => CameraState::Default,
            ActiveView::Local { .. } => CameraState::ViewingLocal,
            ActiveView::Remote { .. } => CameraState::ViewingRemote,
        }
    }
}

/// Coarse controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Default,
    ViewingLocal,
    ViewingRemote,
}
