//! Host abstraction layer
//!
//! The controller never owns vehicles, parts, or the default camera. It
//! consumes the host simulation through the narrow traits in this module,
//! bundled per call into a `HostContext`.
//!
//! Host objects are addressed by generational slotmap keys. A key to a
//! destroyed object never aliases a newer one; lookups simply return `None`.

mod keys;
mod world;
mod flight_camera;
mod notifier;
mod part_events;
mod input;
mod context;

pub use keys::{VehicleKey, PartKey, CameraRef};
pub use world::{
    World, VehicleInfo, PartState, PartModule, ProtoPartSnapshot,
    TransformRef, GameScene, CameraMode,
};
pub use flight_camera::FlightCamera;
pub use notifier::{Notifier, MessageStyle};
pub use part_events::PartEvents;
pub use input::CameraInput;
pub use context::HostContext;
