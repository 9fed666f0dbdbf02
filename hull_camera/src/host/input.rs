/// Per-frame camera key bindings.

use bitflags::bitflags;

bitflags! {
    /// Camera bindings pressed this frame (key-down edges, not held state).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CameraInput: u32 {
        /// Next local camera
        const CYCLE_LOCAL       = 1 << 0;
        /// Next remote camera
        const CYCLE_REMOTE      = 1 << 1;
        /// Back to the default camera (only while an override is active)
        const FORCE_RESTORE     = 1 << 2;
        /// Previous local camera
        const CYCLE_LOCAL_BACK  = 1 << 3;
        /// Previous remote camera
        const CYCLE_REMOTE_BACK = 1 << 4;
        /// Narrow the field of view of a zoom camera
        const ZOOM_IN           = 1 << 5;
        /// Widen the field of view of a zoom camera
        const ZOOM_OUT          = 1 << 6;
    }
}
