//! Camera source descriptors: the controller's read-only input.

mod descriptor;

pub use descriptor::{CameraSourceDescriptor, ModuleKind, ZoomRange};
