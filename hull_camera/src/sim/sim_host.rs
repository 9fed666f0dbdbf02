/// SimHost: the host loop around a `CameraController`.
///
/// Owns the world and the default camera, records screen messages and
/// destruction subscriptions, and fires the controller's callbacks in the
/// order the host would: callbacks before the object disappears.

use rustc_hash::FxHashSet;
use crate::controller::CameraController;
use crate::error::Result;
use crate::host::{
    CameraInput, GameScene, HostContext, MessageStyle, Notifier, PartEvents, PartKey, VehicleKey,
    World,
};
use crate::hullcam_debug;
use crate::visibility::CelestialBody;
use super::sim_camera::SimCamera;
use super::sim_world::SimWorld;

const SOURCE: &str = "hullcam::SimHost";

/// One posted notification
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMessage {
    pub text: String,
    pub duration: f32,
    pub style: MessageStyle,
}

/// Notifier that keeps every message
#[derive(Debug, Default)]
pub struct SimNotifier {
    pub messages: Vec<ScreenMessage>,
}

impl SimNotifier {
    pub fn last_text(&self) -> Option<&str> {
        self.messages.last().map(|message| message.text.as_str())
    }
}

impl Notifier for SimNotifier {
    fn post_screen_message(&mut self, text: &str, duration: f32, style: MessageStyle) {
        self.messages.push(ScreenMessage {
            text: text.to_string(),
            duration,
            style,
        });
    }
}

/// Subscription registry for "part about to be destroyed"
#[derive(Debug, Default)]
pub struct SimPartEvents {
    subscriptions: FxHashSet<PartKey>,
    /// Total subscribe calls
    pub subscribe_calls: usize,
    /// Total unsubscribe calls
    pub unsubscribe_calls: usize,
}

impl SimPartEvents {
    pub fn is_subscribed(&self, part: PartKey) -> bool {
        self.subscriptions.contains(&part)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl PartEvents for SimPartEvents {
    fn subscribe_part_destroyed(&mut self, part: PartKey) {
        self.subscriptions.insert(part);
        self.subscribe_calls += 1;
    }

    fn unsubscribe_part_destroyed(&mut self, part: PartKey) {
        self.subscriptions.remove(&part);
        self.unsubscribe_calls += 1;
    }
}

/// In-memory host.
#[derive(Debug)]
pub struct SimHost {
    pub world: SimWorld,
    pub camera: SimCamera,
    pub notifier: SimNotifier,
    pub part_events: SimPartEvents,
}

impl SimHost {
    pub fn new(sun: CelestialBody) -> Self {
        Self {
            world: SimWorld::new(sun),
            camera: SimCamera::default(),
            notifier: SimNotifier::default(),
            part_events: SimPartEvents::default(),
        }
    }

    /// Borrow the collaborators for one controller call
    pub fn context(&mut self) -> HostContext<'_> {
        HostContext::new(
            &self.world,
            &mut self.camera,
            &mut self.notifier,
            &mut self.part_events,
        )
    }

    // ===== DRIVERS =====

    /// One frame
    pub fn tick(&mut self, controller: &mut CameraController, input: CameraInput) {
        controller.update(&mut self.context(), input);
    }

    /// Run `frames` frames without input
    pub fn run(&mut self, controller: &mut CameraController, frames: usize) {
        for _ in 0..frames {
            self.tick(controller, CameraInput::empty());
        }
    }

    /// Destroy a part, notifying the controller first if it subscribed
    pub fn destroy_part(&mut self, controller: &mut CameraController, part: PartKey) -> Result<()> {
        if self.part_events.is_subscribed(part) {
            hullcam_debug!(SOURCE, "Firing part-destroyed for {:?}", part);
            controller.on_part_destroyed(&mut self.context(), part);
        }
        self.world.remove_part(part)
    }

    /// Destroy a vehicle with all of its parts.
    ///
    /// The vehicle notice fires first, then a part notice for every part
    /// that is still subscribed.
    pub fn destroy_vehicle(
        &mut self,
        controller: &mut CameraController,
        vehicle: VehicleKey,
    ) -> Result<()> {
        controller.on_vehicle_destroyed(&mut self.context(), vehicle);
        for part in self.world.vehicle_parts(vehicle) {
            if self.part_events.is_subscribed(part) {
                controller.on_part_destroyed(&mut self.context(), part);
            }
        }
        self.world.remove_vehicle(vehicle)
    }

    /// Request a scene change
    pub fn change_scene(&mut self, controller: &mut CameraController, scene: GameScene) {
        controller.on_scene_change(&mut self.context(), scene);
        self.world.set_scene(scene);
    }
}
