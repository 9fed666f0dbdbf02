/// Module capability query over two vehicle representations.
///
/// Loaded vehicles expose live parts with typed modules; unloaded vehicles
/// only keep persisted snapshots with module names. Both answer the same
/// question through `ModuleSource`.

use crate::host::{World, VehicleKey, PartState, ProtoPartSnapshot};

/// Answers "does this vehicle carry a module with this name?"
pub trait ModuleSource {
    fn has_module(&self, module_name: &str) -> bool;
}

/// Live part list of a loaded vehicle. Dead parts are ignored.
pub struct LiveParts<'w> {
    world: &'w dyn World,
    vehicle: VehicleKey,
}

impl<'w> LiveParts<'w> {
    pub fn new(world: &'w dyn World, vehicle: VehicleKey) -> Self {
        Self { world, vehicle }
    }
}

impl ModuleSource for LiveParts<'_> {
    fn has_module(&self, module_name: &str) -> bool {
        self.world.vehicle_parts(self.vehicle).into_iter().any(|part| {
            self.world.part_state(part) == Some(PartState::Alive)
                && self.world
                    .part_modules(part)
                    .iter()
                    .any(|module| module.module_name() == module_name)
        })
    }
}

/// Persisted part snapshots of an unloaded vehicle.
pub struct ProtoSnapshot<'w> {
    snapshots: &'w [ProtoPartSnapshot],
}

impl<'w> ProtoSnapshot<'w> {
    pub fn new(snapshots: &'w [ProtoPartSnapshot]) -> Self {
        Self { snapshots }
    }
}

impl ModuleSource for ProtoSnapshot<'_> {
    fn has_module(&self, module_name: &str) -> bool {
        self.snapshots
            .iter()
            .flat_map(|snapshot| snapshot.module_names.iter())
            .any(|name| name == module_name)
    }
}

/// The representation a vehicle currently has, chosen by its loaded flag.
pub enum VehicleRepresentation<'w> {
    Loaded(LiveParts<'w>),
    Unloaded(ProtoSnapshot<'w>),
}

impl<'w> VehicleRepresentation<'w> {
    /// Pick the representation for `vehicle`, or `None` if the host no
    /// longer knows it.
    pub fn of(world: &'w dyn World, vehicle: VehicleKey) -> Option<Self> {
        let info = world.vehicle_info(vehicle)?;
        Some(if info.loaded {
            VehicleRepresentation::Loaded(LiveParts::new(world, vehicle))
        } else {
            VehicleRepresentation::Unloaded(ProtoSnapshot::new(world.proto_part_snapshots(vehicle)))
        })
    }
}

impl ModuleSource for VehicleRepresentation<'_> {
    fn has_module(&self, module_name: &str) -> bool {
        match self {
            VehicleRepresentation::Loaded(live) => live.has_module(module_name),
            VehicleRepresentation::Unloaded(proto) => proto.has_module(module_name),
        }
    }
}

/// Whether `vehicle` carries a module named `module_name`, in whichever
/// representation it currently has.
pub fn has_camera_module(world: &dyn World, vehicle: VehicleKey, module_name: &str) -> bool {
    VehicleRepresentation::of(world, vehicle)
        .map(|representation| representation.has_module(module_name))
        .unwrap_or(false)
}
