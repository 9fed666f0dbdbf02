/// CameraController: selects camera sources and drives the default camera.
///
/// States: Default, ViewingLocal, ViewingRemote. Every change of the bound
/// view goes through `bind_view`, which owns the part-destruction
/// subscription: subscribe when a local view is entered, unsubscribe when
/// it is left.
///
/// Host objects are revalidated every tick. A stale local binding triggers
/// reselection on the active vehicle; a stale remote binding fails over the
/// same way. With nothing left to view, the default camera is restored.

use crate::config::ControllerConfig;
use crate::descriptor::{CameraSourceDescriptor, ZoomRange};
use crate::discovery::{find_local_cameras, find_remote_cameras, resolve_camera};
use crate::error::Result;
use crate::host::{
    CameraInput, CameraMode, CameraRef, GameScene, HostContext, PartKey, PartState,
    TransformRef, VehicleKey, World,
};
use crate::visibility::line_of_sight;
use crate::{hullcam_debug, hullcam_info, hullcam_trace, hullcam_warn};
use super::active_view::{ActiveView, CameraState};
use super::saved_state::SavedCameraState;

const SOURCE: &str = "hullcam::Controller";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Owner of the camera-view state.
///
/// # Example
///
/// ```ignore
/// let mut controller = CameraController::new(ControllerConfig::default())?;
///
/// // Every frame, in the host's update callback:
/// controller.update(&mut host.context(), input);
///
/// // When leaving flight:
/// controller.shutdown(&mut host.context());
/// ```
#[derive(Debug)]
pub struct CameraController {
    config: ControllerConfig,
    /// `Some` while the default camera's fields are overridden
    saved: Option<SavedCameraState>,
    view: ActiveView,
    /// Part whose destruction callback is currently wired
    subscribed_part: Option<PartKey>,
    /// Set once a remote view has pivoted the default camera; cleared
    /// when the camera is handed back to the active vehicle
    camera_displaced: bool,
    /// Session FOV of a zoom camera, reset on every view change
    zoom_fov: Option<f32>,
}

impl CameraController {
    /// Create a controller in the Default state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration does not validate.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        hullcam_info!(SOURCE, "Camera controller created (standoff {})", config.remote_standoff);
        Ok(Self {
            config,
            saved: None,
            view: ActiveView::None,
            subscribed_part: None,
            camera_displaced: false,
            zoom_fov: None,
        })
    }

    /// Tear down: hand the default camera back and drop every subscription.
    pub fn shutdown(mut self, ctx: &mut HostContext<'_>) {
        self.restore_default_camera(ctx);
        hullcam_info!(SOURCE, "Camera controller shut down");
    }

    // ===== OBSERVERS =====

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn active_view(&self) -> ActiveView {
        self.view
    }

    pub fn state(&self) -> CameraState {
        self.view.state()
    }

    /// Snapshot to restore, present while an override is active
    pub fn saved_state(&self) -> Option<&SavedCameraState> {
        self.saved.as_ref()
    }

    /// Part whose destruction the controller is subscribed to
    pub fn subscribed_part(&self) -> Option<PartKey> {
        self.subscribed_part
    }

    /// Zoomed field of view of the current local view, if changed
    pub fn zoom_fov(&self) -> Option<f32> {
        self.zoom_fov
    }

    /// Whether the default camera is not currently authoritative
    pub fn is_overriding(&self) -> bool {
        self.saved.is_some() || self.camera_displaced || !self.view.is_default()
    }

    // ===== SELECTION API =====

    /// View through a descriptor on the active vehicle.
    ///
    /// Clears any remote view. Ignored if `camera` does not resolve to a
    /// camera descriptor, or the descriptor fails validation.
    pub fn activate_local_camera(&mut self, ctx: &mut HostContext<'_>, camera: CameraRef) {
        let world = ctx.world;
        let Some(descriptor) = resolve_camera(world, camera) else {
            hullcam_warn!(SOURCE, "Ignoring activation of unknown camera {:?}", camera);
            return;
        };
        if let Err(err) = descriptor.validate() {
            hullcam_warn!(SOURCE, "Ignoring activation of camera {:?}: {}", camera, err);
            return;
        }

        if let Some(name) = descriptor.mount_name() {
            if world.find_model_transform(camera.part, name).is_none() {
                hullcam_warn!(SOURCE,
                    "Camera '{}' mount transform '{}' not found, using part root",
                    descriptor.name, name);
            }
        }

        self.bind_view(ctx, ActiveView::Local { camera });
        hullcam_info!(SOURCE, "Viewing from local camera '{}'", descriptor.name);
        ctx.notifier.post_screen_message(
            &format!("Viewing from local camera: {}", descriptor.name),
            self.config.notification_duration,
            self.config.notification_style,
        );
    }

    /// View an unloaded vehicle from the standoff distance.
    ///
    /// Clears any local view and its subscription. Ignored if the host no
    /// longer knows `vehicle`.
    pub fn activate_remote_camera(&mut self, ctx: &mut HostContext<'_>, vehicle: VehicleKey) {
        let Some(info) = ctx.world.vehicle_info(vehicle) else {
            hullcam_warn!(SOURCE, "Ignoring activation of unknown vehicle {:?}", vehicle);
            return;
        };

        self.bind_view(ctx, ActiveView::Remote { vehicle });
        hullcam_info!(SOURCE, "Viewing remote vehicle '{}'", info.name);
        ctx.notifier.post_screen_message(
            &format!("Viewing from: {}", info.name),
            self.config.notification_duration,
            self.config.notification_style,
        );
    }

    /// Return to the default camera.
    ///
    /// No-op when already in Default. Otherwise puts back the saved camera
    /// fields, re-targets the active vehicle in the flight scene, and
    /// clears both view references and the subscription.
    pub fn restore_default_camera(&mut self, ctx: &mut HostContext<'_>) {
        if !self.is_overriding() {
            return;
        }

        self.restore_camera_fields(ctx);
        self.bind_view(ctx, ActiveView::None);
        hullcam_info!(SOURCE, "Default camera restored");
    }

    pub fn next_local_camera(&mut self, ctx: &mut HostContext<'_>) {
        self.cycle_local(ctx, Step::Forward);
    }

    pub fn previous_local_camera(&mut self, ctx: &mut HostContext<'_>) {
        self.cycle_local(ctx, Step::Backward);
    }

    pub fn next_remote_camera(&mut self, ctx: &mut HostContext<'_>) {
        self.cycle_remote(ctx, Step::Forward);
    }

    pub fn previous_remote_camera(&mut self, ctx: &mut HostContext<'_>) {
        self.cycle_remote(ctx, Step::Backward);
    }

    /// Narrow the field of view of the current zoom camera by one step
    pub fn zoom_in(&mut self, world: &dyn World) {
        self.zoom(world, ZoomRange::zoom_in);
    }

    /// Widen the field of view of the current zoom camera by one step
    pub fn zoom_out(&mut self, world: &dyn World) {
        self.zoom(world, ZoomRange::zoom_out);
    }

    // ===== HOST CALLBACKS =====

    /// Per-frame entry point.
    ///
    /// Does nothing outside the flight camera mode. Reconciles the bound
    /// view against the world first, then handles this frame's bindings,
    /// so an input-triggered switch takes effect on the next tick.
    pub fn update(&mut self, ctx: &mut HostContext<'_>, input: CameraInput) {
        if ctx.world.camera_mode() != CameraMode::Flight {
            return;
        }

        match self.view {
            ActiveView::Local { camera } => self.reconcile_local(ctx, camera),
            ActiveView::Remote { vehicle } => self.reconcile_remote(ctx, vehicle),
            ActiveView::None => {
                if self.camera_displaced {
                    hullcam_debug!(SOURCE, "Remote target vanished, reselecting");
                    self.find_camera(ctx, |_| false);
                }
            }
        }

        self.process_input(ctx, input);
    }

    /// "Vehicle about to be destroyed" callback.
    ///
    /// Drops the remote binding if it points at `vehicle`; the next tick
    /// then reselects or restores.
    pub fn check_remote_camera(&mut self, vehicle: VehicleKey) {
        if self.view.remote_vehicle() == Some(vehicle) {
            hullcam_debug!(SOURCE, "Remote target {:?} is being destroyed", vehicle);
            self.view = ActiveView::None;
            self.zoom_fov = None;
        }
    }

    /// "Part about to be destroyed" callback for the subscribed part.
    ///
    /// Reselects on the active vehicle without the dying part, or restores.
    pub fn on_part_destroyed(&mut self, ctx: &mut HostContext<'_>, part: PartKey) {
        if self.subscribed_part != Some(part) {
            return;
        }
        hullcam_debug!(SOURCE, "Bound part {:?} is being destroyed", part);
        self.find_camera(ctx, |candidate| candidate == part);
    }

    /// "Vehicle about to be destroyed" callback, fired before any of its
    /// parts go away.
    ///
    /// Drops a remote binding on `vehicle` like `check_remote_camera`. A
    /// local binding on one of its parts is moved off the whole vehicle:
    /// reselect among the active vehicle's other parts, or restore.
    pub fn on_vehicle_destroyed(&mut self, ctx: &mut HostContext<'_>, vehicle: VehicleKey) {
        self.check_remote_camera(vehicle);

        let world = ctx.world;
        let Some(part) = self.view.local_part() else {
            return;
        };
        if world.part_vehicle(part) != Some(vehicle) {
            return;
        }
        hullcam_debug!(SOURCE, "Vehicle {:?} carrying the bound part is being destroyed", vehicle);
        self.find_camera(ctx, |candidate| world.part_vehicle(candidate) == Some(vehicle));
    }

    /// "Scene change requested" callback. Always ends in Default.
    pub fn on_scene_change(&mut self, ctx: &mut HostContext<'_>, scene: GameScene) {
        hullcam_debug!(SOURCE, "Scene change to {:?} requested", scene);
        self.restore_default_camera(ctx);
    }

    // ===== TRANSITIONS =====

    /// Single entry for every view change: moves the destruction
    /// subscription along with the bound part, hands a pivoted camera back
    /// to the active vehicle when no remote view remains, and resets the zoom.
    fn bind_view(&mut self, ctx: &mut HostContext<'_>, view: ActiveView) {
        if view.remote_vehicle().is_none() && self.camera_displaced {
            self.camera_displaced = false;
            Self::retarget_active_vehicle(ctx);
        }
        let next_part = view.local_part();
        if self.subscribed_part != next_part {
            if let Some(previous) = self.subscribed_part.take() {
                ctx.part_events.unsubscribe_part_destroyed(previous);
            }
            if let Some(part) = next_part {
                ctx.part_events.subscribe_part_destroyed(part);
                self.subscribed_part = Some(part);
            }
        }
        if self.view != view {
            self.zoom_fov = None;
        }
        self.view = view;
    }

    /// Reselect the first local camera on the active vehicle whose part is
    /// not `excluded`; restore the default camera if there is none.
    fn find_camera(&mut self, ctx: &mut HostContext<'_>, excluded: impl Fn(PartKey) -> bool) {
        let world = ctx.world;
        let cameras = find_local_cameras(
            world,
            world.active_vehicle(),
            self.config.skip_disabled_cameras,
        );

        match cameras.into_iter().find(|camera| !excluded(camera.part)) {
            Some(camera) => self.activate_local_camera(ctx, camera),
            None => {
                hullcam_debug!(SOURCE, "No local camera available, falling back to default");
                self.restore_default_camera(ctx);
            }
        }
    }

    /// Put back the saved camera fields without touching the view.
    fn restore_camera_fields(&mut self, ctx: &mut HostContext<'_>) {
        if let Some(saved) = self.saved.take() {
            saved.apply(&mut *ctx.camera);
            Self::retarget_active_vehicle(ctx);
        }
    }

    fn retarget_active_vehicle(ctx: &mut HostContext<'_>) {
        if ctx.world.loaded_scene() != GameScene::Flight {
            return;
        }
        if let Some(active) = ctx.world.active_vehicle() {
            ctx.camera.set_target(Some(active));
        }
    }

    // ===== RECONCILIATION =====

    fn reconcile_local(&mut self, ctx: &mut HostContext<'_>, camera: CameraRef) {
        let world = ctx.world;
        let active = world.active_vehicle();
        let alive = world.part_state(camera.part) == Some(PartState::Alive);
        let on_active = active.is_some() && world.part_vehicle(camera.part) == active;

        match resolve_camera(world, camera) {
            Some(descriptor) if alive && on_active && descriptor.is_valid() => {
                self.drive_local(ctx, camera, descriptor)
            }
            _ => {
                hullcam_debug!(SOURCE, "Local camera {:?} no longer usable, reselecting", camera);
                self.find_camera(ctx, |_| false);
            }
        }
    }

    fn drive_local(
        &mut self,
        ctx: &mut HostContext<'_>,
        camera: CameraRef,
        descriptor: &CameraSourceDescriptor,
    ) {
        if self.saved.is_none() {
            self.saved = Some(SavedCameraState::capture(&*ctx.camera));
            hullcam_debug!(SOURCE, "Saved default camera state");
        }

        let mount = descriptor
            .mount_name()
            .and_then(|name| ctx.world.find_model_transform(camera.part, name))
            .unwrap_or(TransformRef::PartRoot(camera.part));
        hullcam_trace!(SOURCE, "Mounting camera '{}' on {:?}", descriptor.name, mount);

        ctx.camera.set_target(None);
        ctx.camera.set_parent(Some(mount));
        ctx.camera.set_local_position(descriptor.position);
        ctx.camera.set_local_rotation(descriptor.orientation());
        ctx.camera.set_fov(self.zoom_fov.unwrap_or(descriptor.fov));
        ctx.camera.set_near_clip(descriptor.clip);
    }

    fn reconcile_remote(&mut self, ctx: &mut HostContext<'_>, vehicle: VehicleKey) {
        // Remote views pivot the default camera in place; anything a local
        // view overrode is put back first.
        self.restore_camera_fields(ctx);

        let world = ctx.world;
        let from = world
            .active_vehicle()
            .and_then(|active| world.vehicle_info(active))
            .map(|info| info.center_of_mass);
        let target = world.vehicle_info(vehicle);

        let viewable = match (from, &target) {
            (Some(from), Some(info)) => {
                !info.loaded && !info.dead && line_of_sight(from, info.center_of_mass, world.sun())
            }
            _ => false,
        };

        match target {
            Some(info) if viewable => {
                hullcam_trace!(SOURCE, "Remote standoff on '{}'", info.name);
                ctx.camera.set_cam_coords_from_position(info.center_of_mass);
                ctx.camera.set_distance_immediate(self.config.remote_standoff);
                self.camera_displaced = true;
            }
            _ => {
                hullcam_debug!(SOURCE, "Remote target {:?} no longer viewable, reselecting", vehicle);
                self.find_camera(ctx, |_| false);
            }
        }
    }

    // ===== INPUT & CYCLING =====

    fn process_input(&mut self, ctx: &mut HostContext<'_>, input: CameraInput) {
        if input.contains(CameraInput::CYCLE_LOCAL) {
            self.next_local_camera(ctx);
        }
        if input.contains(CameraInput::CYCLE_LOCAL_BACK) {
            self.previous_local_camera(ctx);
        }
        if input.contains(CameraInput::CYCLE_REMOTE) {
            self.next_remote_camera(ctx);
        }
        if input.contains(CameraInput::CYCLE_REMOTE_BACK) {
            self.previous_remote_camera(ctx);
        }
        if input.contains(CameraInput::ZOOM_IN) {
            self.zoom_in(ctx.world);
        }
        if input.contains(CameraInput::ZOOM_OUT) {
            self.zoom_out(ctx.world);
        }
        if input.contains(CameraInput::FORCE_RESTORE) && self.is_overriding() {
            self.restore_default_camera(ctx);
        }
    }

    fn cycle_local(&mut self, ctx: &mut HostContext<'_>, step: Step) {
        let world = ctx.world;
        let cameras = find_local_cameras(
            world,
            world.active_vehicle(),
            self.config.skip_disabled_cameras,
        );
        if let Some(camera) = pick_candidate(&cameras, self.view.local_camera(), step) {
            self.activate_local_camera(ctx, camera);
        }
    }

    fn cycle_remote(&mut self, ctx: &mut HostContext<'_>, step: Step) {
        let vehicles = find_remote_cameras(ctx.world, &self.config.remote_module_name);
        if let Some(vehicle) = pick_candidate(&vehicles, self.view.remote_vehicle(), step) {
            self.activate_remote_camera(ctx, vehicle);
        }
    }

    fn zoom(&mut self, world: &dyn World, step: fn(&ZoomRange, f32) -> f32) {
        let Some(camera) = self.view.local_camera() else {
            return;
        };
        let Some(descriptor) = resolve_camera(world, camera) else {
            return;
        };
        let Some(range) = descriptor.zoom else {
            return;
        };
        let fov = step(&range, self.zoom_fov.unwrap_or(descriptor.fov));
        hullcam_debug!(SOURCE, "Zoom '{}' to {:.1} deg", descriptor.name, fov);
        self.zoom_fov = Some(fov);
    }
}

/// Next/previous entry after `current`, wrapping. The first candidate when
/// nothing (or something no longer listed) is current.
fn pick_candidate<T: Copy + PartialEq>(candidates: &[T], current: Option<T>, step: Step) -> Option<T> {
    let len = candidates.len();
    if len == 0 {
        return None;
    }
    let index = match current.and_then(|c| candidates.iter().position(|&candidate| candidate == c)) {
        None => 0,
        Some(i) => match step {
            Step::Forward => (i + 1) % len,
            Step::Backward => (i + len - 1) % len,
        },
    };
    Some(candidates[index])
}

#[cfg(test)]
#[path = "camera_controller_tests.rs"]
mod tests;
