/// Stable keys for host-owned objects.

use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a vehicle known to the host.
    ///
    /// Stays valid while the vehicle exists, loaded or not.
    pub struct VehicleKey;

    /// Stable key for a part of a loaded vehicle.
    ///
    /// Becomes invalid when the part is destroyed or its vehicle unloads.
    pub struct PartKey;
}

/// Reference to one camera descriptor: the owning part plus the index of
/// the camera module within that part's module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraRef {
    pub part: PartKey,
    pub module: usize,
}

impl CameraRef {
    pub fn new(part: PartKey, module: usize) -> Self {
        Self { part, module }
    }
}
