/*!
# Hull Camera

Camera-view management for a space-flight simulation.

Lets the player look through cameras mounted on the parts of the active
vehicle, or from a fixed standoff at remote unloaded vehicles that carry a
zoom camera and are in line of sight. The controller saves the default
camera before overriding it and puts it back on restore, scene change, or
when the viewed object disappears.

## Architecture

- **CameraController**: the view state machine (Default, ViewingLocal, ViewingRemote)
- **World / FlightCamera / Notifier / PartEvents**: host abstraction traits
- **Discovery**: ordered local and remote candidate lists
- **Visibility**: celestial line-of-sight test
- **Sim**: in-memory host for tests and headless runs

The host owns vehicles, parts, and the default camera. The controller
reads them through `World` and writes the camera only while an override
is active.
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod descriptor;
pub mod host;
pub mod visibility;
pub mod discovery;
pub mod controller;
pub mod sim;

// Main hullcam namespace module
pub mod hullcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Controller
    pub use crate::controller::{CameraController, ActiveView, CameraState, SavedCameraState};
    pub use crate::config::ControllerConfig;

    // Camera sources
    pub use crate::descriptor::{CameraSourceDescriptor, ModuleKind, ZoomRange};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, set_min_severity, min_severity, log, log_detailed};
    }

    // Host abstraction sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // Visibility sub-module
    pub mod visibility {
        pub use crate::visibility::*;
    }

    // In-memory host sub-module
    pub mod sim {
        pub use crate::sim::*;
    }
}

// Re-export math library at crate root
pub use glam;
