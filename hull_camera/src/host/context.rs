/// HostContext: the host collaborators for one controller call.

use super::flight_camera::FlightCamera;
use super::notifier::Notifier;
use super::part_events::PartEvents;
use super::world::World;

/// Borrowed host collaborators.
///
/// Built by the host for each `update` or callback invocation. Splitting
/// the world (shared) from the camera, notifier, and event wiring
/// (exclusive) lets the controller read the scene while driving the camera.
pub struct HostContext<'a> {
    pub world: &'a dyn World,
    pub camera: &'a mut dyn FlightCamera,
    pub notifier: &'a mut dyn Notifier,
    pub part_events: &'a mut dyn PartEvents,
}

impl<'a> HostContext<'a> {
    pub fn new(
        world: &'a dyn World,
        camera: &'a mut dyn FlightCamera,
        notifier: &'a mut dyn Notifier,
        part_events: &'a mut dyn PartEvents,
    ) -> Self {
        Self {
            world,
            camera,
            notifier,
            part_events,
        }
    }
}
