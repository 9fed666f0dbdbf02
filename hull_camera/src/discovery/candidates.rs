/// Ordered candidate lists for cycling.

use crate::descriptor::CameraSourceDescriptor;
use crate::host::{World, VehicleKey, CameraRef, PartState};
use crate::visibility::line_of_sight;
use super::module_source::has_camera_module;

/// Camera descriptors on the live parts of `vehicle`.
///
/// Order: part order, then module order within each part. Dead parts and
/// descriptors that fail validation are skipped, and so are disabled
/// descriptors when `skip_disabled` is set.
/// Returns an empty list for `None` or an unknown vehicle.
pub fn find_local_cameras(
    world: &dyn World,
    vehicle: Option<VehicleKey>,
    skip_disabled: bool,
) -> Vec<CameraRef> {
    let Some(vehicle) = vehicle else {
        return Vec::new();
    };

    let mut cameras = Vec::new();
    for part in world.vehicle_parts(vehicle) {
        if world.part_state(part) != Some(PartState::Alive) {
            continue;
        }
        for (index, module) in world.part_modules(part).iter().enumerate() {
            let Some(descriptor) = module.as_camera() else {
                continue;
            };
            if skip_disabled && !descriptor.enabled {
                continue;
            }
            if !descriptor.is_valid() {
                continue;
            }
            cameras.push(CameraRef::new(part, index));
        }
    }
    cameras
}

/// Unloaded vehicles viewable remotely from the active vehicle.
///
/// A vehicle qualifies when it is not the active vehicle, is unloaded and
/// not dead, can see the active vehicle's center of mass, and carries a module named
/// `module_name`. Empty without an active vehicle.
pub fn find_remote_cameras(world: &dyn World, module_name: &str) -> Vec<VehicleKey> {
    let Some(active) = world.active_vehicle() else {
        return Vec::new();
    };
    let Some(active_info) = world.vehicle_info(active) else {
        return Vec::new();
    };

    world
        .vehicles()
        .into_iter()
        .filter(|&vehicle| vehicle != active)
        .filter(|&vehicle| {
            world.vehicle_info(vehicle).is_some_and(|info| {
                !info.loaded
                    && !info.dead
                    && line_of_sight(active_info.center_of_mass, info.center_of_mass, world.sun())
            })
        })
        .filter(|&vehicle| has_camera_module(world, vehicle, module_name))
        .collect()
}

/// Descriptor behind a `CameraRef`, if the part and module still exist.
pub fn resolve_camera(world: &dyn World, camera: CameraRef) -> Option<&CameraSourceDescriptor> {
    world
        .part_modules(camera.part)
        .get(camera.module)
        .and_then(|module| module.as_camera())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
