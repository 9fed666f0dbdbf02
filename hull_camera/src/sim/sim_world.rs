/// SimWorld: in-memory vehicles, parts, and celestial bodies.
///
/// Vehicles and parts live in slot maps, so keys behave like the host's:
/// destroying or unloading an object invalidates its keys for good.
/// Unloading a vehicle moves its parts into storage and writes persisted
/// snapshots; loading it again re-creates the parts under fresh keys.

use glam::DVec3;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::error::Result;
use crate::host::{
    CameraMode, GameScene, PartKey, PartModule, PartState, ProtoPartSnapshot, TransformRef,
    VehicleInfo, VehicleKey, World,
};
use crate::hullcam_bail;
use crate::visibility::CelestialBody;

const SOURCE: &str = "hullcam::SimWorld";

/// Parts as stored while their vehicle is unloaded
#[derive(Debug, Clone)]
struct StoredPart {
    state: PartState,
    modules: Vec<PartModule>,
    model_transforms: FxHashSet<String>,
}

#[derive(Debug)]
struct SimVehicle {
    name: String,
    dead: bool,
    center_of_mass: DVec3,
    /// Live parts, in order; empty while unloaded
    parts: Vec<PartKey>,
    /// `Some` while unloaded
    stored_parts: Option<Vec<StoredPart>>,
    proto_parts: Vec<ProtoPartSnapshot>,
}

#[derive(Debug)]
struct SimPart {
    vehicle: VehicleKey,
    state: PartState,
    modules: Vec<PartModule>,
    model_transforms: FxHashSet<String>,
}

/// In-memory implementation of `World`.
#[derive(Debug)]
pub struct SimWorld {
    vehicles: SlotMap<VehicleKey, SimVehicle>,
    /// Host iteration order
    vehicle_order: Vec<VehicleKey>,
    parts: SlotMap<PartKey, SimPart>,
    active: Option<VehicleKey>,
    sun: CelestialBody,
    scene: GameScene,
    camera_mode: CameraMode,
}

impl SimWorld {
    /// Empty flight scene around `sun`
    pub fn new(sun: CelestialBody) -> Self {
        Self {
            vehicles: SlotMap::with_key(),
            vehicle_order: Vec::new(),
            parts: SlotMap::with_key(),
            active: None,
            sun,
            scene: GameScene::Flight,
            camera_mode: CameraMode::Flight,
        }
    }

    // ===== VEHICLES =====

    /// Add a loaded vehicle with no parts
    pub fn spawn_vehicle(&mut self, name: impl Into<String>, center_of_mass: DVec3) -> VehicleKey {
        let key = self.vehicles.insert(SimVehicle {
            name: name.into(),
            dead: false,
            center_of_mass,
            parts: Vec::new(),
            stored_parts: None,
            proto_parts: Vec::new(),
        });
        self.vehicle_order.push(key);
        key
    }

    /// Add an unloaded vehicle known only through persisted snapshots
    pub fn spawn_unloaded_vehicle(
        &mut self,
        name: impl Into<String>,
        center_of_mass: DVec3,
        proto_parts: Vec<ProtoPartSnapshot>,
    ) -> VehicleKey {
        let key = self.vehicles.insert(SimVehicle {
            name: name.into(),
            dead: false,
            center_of_mass,
            parts: Vec::new(),
            stored_parts: Some(Vec::new()),
            proto_parts,
        });
        self.vehicle_order.push(key);
        key
    }

    pub fn set_active_vehicle(&mut self, vehicle: Option<VehicleKey>) -> Result<()> {
        if let Some(key) = vehicle {
            self.vehicle(key)?;
        }
        self.active = vehicle;
        Ok(())
    }

    pub fn move_vehicle(&mut self, vehicle: VehicleKey, center_of_mass: DVec3) -> Result<()> {
        self.vehicle_mut(vehicle)?.center_of_mass = center_of_mass;
        Ok(())
    }

    /// Mark a vehicle dead without removing it
    pub fn kill_vehicle(&mut self, vehicle: VehicleKey) -> Result<()> {
        self.vehicle_mut(vehicle)?.dead = true;
        Ok(())
    }

    /// Remove a vehicle and all of its parts
    pub fn remove_vehicle(&mut self, vehicle: VehicleKey) -> Result<()> {
        let Some(removed) = self.vehicles.remove(vehicle) else {
            hullcam_bail!(SOURCE, UnknownHandle, "vehicle {:?}", vehicle);
        };
        for part in removed.parts {
            self.parts.remove(part);
        }
        self.vehicle_order.retain(|&key| key != vehicle);
        if self.active == Some(vehicle) {
            self.active = None;
        }
        Ok(())
    }

    /// Leave physics range: live parts become persisted snapshots.
    pub fn unload_vehicle(&mut self, vehicle: VehicleKey) -> Result<()> {
        let part_keys = {
            let entry = self.vehicle_mut(vehicle)?;
            if entry.stored_parts.is_some() {
                return Ok(());
            }
            std::mem::take(&mut entry.parts)
        };

        let mut stored = Vec::with_capacity(part_keys.len());
        let mut proto = Vec::with_capacity(part_keys.len());
        for key in part_keys {
            if let Some(part) = self.parts.remove(key) {
                proto.push(ProtoPartSnapshot {
                    module_names: part.modules.iter().map(|m| m.module_name().to_string()).collect(),
                });
                stored.push(StoredPart {
                    state: part.state,
                    modules: part.modules,
                    model_transforms: part.model_transforms,
                });
            }
        }

        let entry = self.vehicle_mut(vehicle)?;
        entry.stored_parts = Some(stored);
        entry.proto_parts = proto;
        Ok(())
    }

    /// Enter physics range: stored parts come back under new keys.
    pub fn load_vehicle(&mut self, vehicle: VehicleKey) -> Result<Vec<PartKey>> {
        let Some(stored) = self.vehicle_mut(vehicle)?.stored_parts.take() else {
            return Ok(self.vehicle(vehicle)?.parts.clone());
        };

        let keys: Vec<PartKey> = stored
            .into_iter()
            .map(|part| {
                self.parts.insert(SimPart {
                    vehicle,
                    state: part.state,
                    modules: part.modules,
                    model_transforms: part.model_transforms,
                })
            })
            .collect();

        let entry = self.vehicle_mut(vehicle)?;
        entry.parts = keys.clone();
        entry.proto_parts.clear();
        Ok(keys)
    }

    // ===== PARTS =====

    /// Attach a new live part to a loaded vehicle.
    ///
    /// Every camera module is validated first; nothing is added if one fails.
    pub fn add_part(&mut self, vehicle: VehicleKey, modules: Vec<PartModule>) -> Result<PartKey> {
        if self.vehicle(vehicle)?.stored_parts.is_some() {
            hullcam_bail!(SOURCE, UnknownHandle, "vehicle {:?} is unloaded", vehicle);
        }
        for descriptor in modules.iter().filter_map(PartModule::as_camera) {
            descriptor.validate()?;
        }
        let key = self.parts.insert(SimPart {
            vehicle,
            state: PartState::Alive,
            modules,
            model_transforms: FxHashSet::default(),
        });
        self.vehicle_mut(vehicle)?.parts.push(key);
        Ok(key)
    }

    /// Declare a named model transform inside a part
    pub fn add_model_transform(&mut self, part: PartKey, name: impl Into<String>) -> Result<()> {
        self.part_mut(part)?.model_transforms.insert(name.into());
        Ok(())
    }

    /// Mark a part dead without removing it
    pub fn kill_part(&mut self, part: PartKey) -> Result<()> {
        self.part_mut(part)?.state = PartState::Dead;
        Ok(())
    }

    /// Remove a part from the world
    pub fn remove_part(&mut self, part: PartKey) -> Result<()> {
        let Some(removed) = self.parts.remove(part) else {
            hullcam_bail!(SOURCE, UnknownHandle, "part {:?}", part);
        };
        if let Some(vehicle) = self.vehicles.get_mut(removed.vehicle) {
            vehicle.parts.retain(|&key| key != part);
        }
        Ok(())
    }

    /// Move a part to another loaded vehicle (decoupling, docking)
    pub fn transfer_part(&mut self, part: PartKey, to: VehicleKey) -> Result<()> {
        if self.vehicle(to)?.stored_parts.is_some() {
            hullcam_bail!(SOURCE, UnknownHandle, "vehicle {:?} is unloaded", to);
        }
        let from = {
            let entry = self.part_mut(part)?;
            std::mem::replace(&mut entry.vehicle, to)
        };
        if let Some(vehicle) = self.vehicles.get_mut(from) {
            vehicle.parts.retain(|&key| key != part);
        }
        self.vehicle_mut(to)?.parts.push(part);
        Ok(())
    }

    // ===== ENVIRONMENT =====

    pub fn set_scene(&mut self, scene: GameScene) {
        self.scene = scene;
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera_mode = mode;
    }

    pub fn contains_part(&self, part: PartKey) -> bool {
        self.parts.contains_key(part)
    }

    // ===== INTERNAL =====

    fn vehicle(&self, key: VehicleKey) -> Result<&SimVehicle> {
        match self.vehicles.get(key) {
            Some(vehicle) => Ok(vehicle),
            None => hullcam_bail!(SOURCE, UnknownHandle, "vehicle {:?}", key),
        }
    }

    fn vehicle_mut(&mut self, key: VehicleKey) -> Result<&mut SimVehicle> {
        match self.vehicles.get_mut(key) {
            Some(vehicle) => Ok(vehicle),
            None => hullcam_bail!(SOURCE, UnknownHandle, "vehicle {:?}", key),
        }
    }

    fn part_mut(&mut self, key: PartKey) -> Result<&mut SimPart> {
        match self.parts.get_mut(key) {
            Some(part) => Ok(part),
            None => hullcam_bail!(SOURCE, UnknownHandle, "part {:?}", key),
        }
    }
}

impl World for SimWorld {
    fn vehicles(&self) -> Vec<VehicleKey> {
        self.vehicle_order.clone()
    }

    fn active_vehicle(&self) -> Option<VehicleKey> {
        self.active
    }

    fn vehicle_info(&self, vehicle: VehicleKey) -> Option<VehicleInfo> {
        self.vehicles.get(vehicle).map(|entry| VehicleInfo {
            name: entry.name.clone(),
            loaded: entry.stored_parts.is_none(),
            dead: entry.dead,
            center_of_mass: entry.center_of_mass,
        })
    }

    fn vehicle_parts(&self, vehicle: VehicleKey) -> Vec<PartKey> {
        self.vehicles
            .get(vehicle)
            .map(|entry| entry.parts.clone())
            .unwrap_or_default()
    }

    fn proto_part_snapshots(&self, vehicle: VehicleKey) -> &[ProtoPartSnapshot] {
        self.vehicles
            .get(vehicle)
            .map(|entry| entry.proto_parts.as_slice())
            .unwrap_or(&[])
    }

    fn part_state(&self, part: PartKey) -> Option<PartState> {
        self.parts.get(part).map(|entry| entry.state)
    }

    fn part_vehicle(&self, part: PartKey) -> Option<VehicleKey> {
        self.parts.get(part).map(|entry| entry.vehicle)
    }

    fn part_modules(&self, part: PartKey) -> &[PartModule] {
        self.parts
            .get(part)
            .map(|entry| entry.modules.as_slice())
            .unwrap_or(&[])
    }

    fn find_model_transform(&self, part: PartKey, name: &str) -> Option<TransformRef> {
        let entry = self.parts.get(part)?;
        entry.model_transforms.contains(name).then(|| TransformRef::PartModel {
            part,
            name: name.to_string(),
        })
    }

    fn sun(&self) -> &CelestialBody {
        &self.sun
    }

    fn loaded_scene(&self) -> GameScene {
        self.scene
    }

    fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }
}
