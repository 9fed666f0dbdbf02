/// World: read-only view of the host's vehicles, parts, and bodies.

use glam::DVec3;
use crate::descriptor::CameraSourceDescriptor;
use crate::visibility::CelestialBody;
use super::keys::{VehicleKey, PartKey};

/// Snapshot of per-vehicle state the controller needs each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInfo {
    /// Display name (used in notifications)
    pub name: String,
    /// Whether the vehicle is in physics range with live parts
    pub loaded: bool,
    /// Host marked the vehicle destroyed
    pub dead: bool,
    /// World-space center of mass
    pub center_of_mass: DVec3,
}

/// Part lifecycle state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartState {
    Alive,
    Dead,
}

/// One module on a live part.
#[derive(Debug, Clone, PartialEq)]
pub enum PartModule {
    /// A camera source
    Camera(CameraSourceDescriptor),
    /// Any other module, known only by name
    Other { name: String },
}

impl PartModule {
    /// Runtime module name
    pub fn module_name(&self) -> &str {
        match self {
            PartModule::Camera(descriptor) => descriptor.module_kind().module_name(),
            PartModule::Other { name } => name,
        }
    }

    pub fn as_camera(&self) -> Option<&CameraSourceDescriptor> {
        match self {
            PartModule::Camera(descriptor) => Some(descriptor),
            PartModule::Other { .. } => None,
        }
    }
}

/// Persisted part record kept for unloaded vehicles.
///
/// Unloaded vehicles carry no live modules; only module names survive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtoPartSnapshot {
    pub module_names: Vec<String>,
}

/// Parent attachment for the default camera.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformRef {
    /// A host scene node the controller knows nothing about
    Node(u64),
    /// Root transform of a part
    PartRoot(PartKey),
    /// Named model transform inside a part
    PartModel { part: PartKey, name: String },
}

/// Top-level host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameScene {
    MainMenu,
    SpaceCenter,
    Editor,
    Flight,
    TrackingStation,
}

/// Host camera mode. The controller only acts in `Flight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Flight,
    Map,
    Internal,
    Iva,
}

/// Read-only access to the host simulation.
///
/// Every lookup by key returns `None` (or an empty collection) once the
/// object is gone. Iteration order must be stable between calls so that
/// cycling behaves predictably.
pub trait World {
    /// All known vehicles, loaded or not
    fn vehicles(&self) -> Vec<VehicleKey>;

    /// The player-controlled vehicle, if any
    fn active_vehicle(&self) -> Option<VehicleKey>;

    fn vehicle_info(&self, vehicle: VehicleKey) -> Option<VehicleInfo>;

    /// Live parts of a loaded vehicle (empty when unloaded)
    fn vehicle_parts(&self, vehicle: VehicleKey) -> Vec<PartKey>;

    /// Persisted part records of an unloaded vehicle
    fn proto_part_snapshots(&self, vehicle: VehicleKey) -> &[ProtoPartSnapshot];

    fn part_state(&self, part: PartKey) -> Option<PartState>;

    /// Vehicle a part currently belongs to
    fn part_vehicle(&self, part: PartKey) -> Option<VehicleKey>;

    /// Modules of a live part in declaration order
    fn part_modules(&self, part: PartKey) -> &[PartModule];

    /// Resolve a named model transform on a part
    fn find_model_transform(&self, part: PartKey, name: &str) -> Option<TransformRef>;

    /// Root of the celestial body hierarchy (the sun)
    fn sun(&self) -> &CelestialBody;

    fn loaded_scene(&self) -> GameScene;

    fn camera_mode(&self) -> CameraMode;
}
