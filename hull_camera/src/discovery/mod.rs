//! Candidate discovery: which cameras can be viewed right now.
//!
//! Local candidates are camera descriptors on the live parts of the active
//! vehicle. Remote candidates are unloaded vehicles, in line of sight of the
//! active vehicle, that carry a zoom camera module.

mod module_source;
mod candidates;

pub use module_source::{
    ModuleSource, LiveParts, ProtoSnapshot, VehicleRepresentation, has_camera_module,
};
pub use candidates::{find_local_cameras, find_remote_cameras, resolve_camera};
