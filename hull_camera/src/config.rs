/// Controller configuration
///
/// Plain data with sensible defaults. Validated once when the controller
/// is constructed; never mutated afterwards.

use crate::error::Result;
use crate::hullcam_bail;
use crate::host::MessageStyle;
use crate::descriptor::ModuleKind;

/// Distance (in world units) between a remote target's center of mass and
/// the camera viewing it.
pub const DEFAULT_REMOTE_STANDOFF: f64 = 100.0;

/// How long switch notifications stay on screen (seconds)
pub const DEFAULT_NOTIFICATION_DURATION: f32 = 5.0;

/// Configuration for a `CameraController`
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Standoff distance for remote views
    pub remote_standoff: f64,
    /// Lifetime of the on-screen switch notification (seconds)
    pub notification_duration: f32,
    /// Screen placement of the switch notification
    pub notification_style: MessageStyle,
    /// Module name an unloaded vehicle must carry to be a remote target
    pub remote_module_name: String,
    /// Leave descriptors with `enabled == false` out of the local candidates
    pub skip_disabled_cameras: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            remote_standoff: DEFAULT_REMOTE_STANDOFF,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            notification_style: MessageStyle::UpperLeft,
            remote_module_name: ModuleKind::HullCameraZoom.module_name().to_string(),
            skip_disabled_cameras: true,
        }
    }
}

impl ControllerConfig {
    /// Check that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - `remote_standoff` is not a positive finite number
    /// - `notification_duration` is negative or not finite
    /// - `remote_module_name` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.remote_standoff.is_finite() || self.remote_standoff <= 0.0 {
            hullcam_bail!("hullcam::Config", InvalidConfig,
                "remote_standoff must be a positive finite distance, got {}", self.remote_standoff);
        }
        if !self.notification_duration.is_finite() || self.notification_duration < 0.0 {
            hullcam_bail!("hullcam::Config", InvalidConfig,
                "notification_duration must be >= 0, got {}", self.notification_duration);
        }
        if self.remote_module_name.trim().is_empty() {
            hullcam_bail!("hullcam::Config", InvalidConfig, "remote_module_name is empty");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
