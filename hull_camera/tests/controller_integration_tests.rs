//! Integration tests for CameraController driven by the in-memory host
//!
//! Full flight sessions: local cycling, remote viewing, destruction,
//! load/unload, and scene exit, through the public API only.
//!
//! Run with: cargo test --test controller_integration_tests

use hull_camera::glam::{DVec3, Quat, Vec3};
use hull_camera::hullcam::host::{
    CameraInput, CameraRef, FlightCamera, GameScene, HostContext, PartModule, ProtoPartSnapshot,
    TransformRef, VehicleKey, World,
};
use hull_camera::hullcam::sim::{SimHost, DEFAULT_CAMERA_PIVOT};
use hull_camera::hullcam::visibility::CelestialBody;
use hull_camera::hullcam::{
    ActiveView, CameraController, CameraSourceDescriptor, CameraState, ControllerConfig, ZoomRange,
};

// ============================================================================
// HELPERS
// ============================================================================

fn kerbol_system() -> CelestialBody {
    CelestialBody::new("Kerbol", DVec3::ZERO, 261_600.0).with_orbiting(
        CelestialBody::new("Kerbin", DVec3::new(13_599_840.0, 0.0, 0.0), 600_000.0)
            .with_orbiting(CelestialBody::new("Mun", DVec3::new(13_599_840.0, 12_000_000.0, 0.0), 200_000.0)),
    )
}

/// Low Kerbin orbit, +Z side
const SHIP_POS: DVec3 = DVec3::new(13_599_840.0, 0.0, 700_000.0);

fn zoom_relay_snapshot() -> Vec<ProtoPartSnapshot> {
    vec![
        ProtoPartSnapshot { module_names: vec!["ModuleCommand".to_string()] },
        ProtoPartSnapshot { module_names: vec!["MuMechModuleHullCameraZoom".to_string()] },
    ]
}

struct Session {
    host: SimHost,
    controller: CameraController,
    ship: VehicleKey,
}

impl Session {
    fn new() -> Self {
        let mut host = SimHost::new(kerbol_system());
        let ship = host.world.spawn_vehicle("Kerbal X", SHIP_POS);
        let pod = host
            .world
            .add_part(ship, vec![
                PartModule::Other { name: "ModuleCommand".into() },
                PartModule::Camera(
                    CameraSourceDescriptor::named("Docking Cam")
                        .with_transform("dockingNode")
                        .with_pose(Vec3::new(0.0, 0.0, 0.5), Vec3::Y, Vec3::Z)
                        .with_lens(50.0, 0.02),
                ),
            ])
            .unwrap();
        host.world.add_model_transform(pod, "dockingNode").unwrap();
        host.world
            .add_part(ship, vec![PartModule::Camera(
                CameraSourceDescriptor::named("Booster Cam")
                    .with_zoom(ZoomRange { fov_min: 10.0, fov_max: 90.0, zoom_mult: 2.0 }),
            )])
            .unwrap();
        host.world.set_active_vehicle(Some(ship)).unwrap();
        let controller = CameraController::new(ControllerConfig::default()).unwrap();
        Self { host, controller, ship }
    }

    fn tick(&mut self, input: CameraInput) {
        self.host.tick(&mut self.controller, input);
    }
}

// ============================================================================
// SESSION TESTS
// ============================================================================

#[test]
fn test_integration_full_local_session() {
    let mut s = Session::new();

    s.tick(CameraInput::CYCLE_LOCAL);
    s.host.run(&mut s.controller, 3);
    assert_eq!(s.controller.state(), CameraState::ViewingLocal);
    assert!(matches!(s.host.camera.parent, Some(TransformRef::PartModel { ref name, .. }) if name == "dockingNode"));
    assert_eq!(s.host.camera.fov, 50.0);
    assert!(s.host.camera.local_rotation.mul_vec3(Vec3::Z).abs_diff_eq(Vec3::Y, 1e-5));

    s.tick(CameraInput::CYCLE_LOCAL | CameraInput::ZOOM_IN);
    s.tick(CameraInput::ZOOM_IN);
    s.tick(CameraInput::empty());
    assert_eq!(s.host.camera.fov, 15.0);

    s.tick(CameraInput::FORCE_RESTORE);
    assert_eq!(s.controller.state(), CameraState::Default);
    assert_eq!(s.host.camera.parent, Some(DEFAULT_CAMERA_PIVOT));
    assert_eq!(s.host.camera.fov, 60.0);
    assert_eq!(s.host.camera.target, Some(s.ship));
    assert_eq!(s.host.part_events.subscription_count(), 0);

    let texts: Vec<&str> = s.host.notifier.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec![
        "Viewing from local camera: Docking Cam",
        "Viewing from local camera: Booster Cam",
    ]);
}

#[test]
fn test_integration_remote_view_and_occlusion() {
    let mut s = Session::new();
    // Same side of Kerbin, then behind it
    let relay = s.host.world.spawn_unloaded_vehicle(
        "Relay 1",
        DVec3::new(13_599_840.0, 300_000.0, 2_000_000.0),
        zoom_relay_snapshot(),
    );

    s.tick(CameraInput::CYCLE_REMOTE);
    s.tick(CameraInput::empty());
    assert_eq!(s.controller.active_view(), ActiveView::Remote { vehicle: relay });
    assert_eq!(s.host.camera.pivot, Some(DVec3::new(13_599_840.0, 300_000.0, 2_000_000.0)));
    assert_eq!(s.host.camera.distance, 100.0);
    assert_eq!(s.host.notifier.last_text(), Some("Viewing from: Relay 1"));

    s.host.world.move_vehicle(relay, DVec3::new(13_599_840.0, 0.0, -2_000_000.0)).unwrap();
    s.tick(CameraInput::empty());
    assert_eq!(s.controller.state(), CameraState::ViewingLocal);
    assert_eq!(s.host.camera.target, Some(s.ship));
}

#[test]
fn test_integration_remote_target_enters_physics_range() {
    let mut s = Session::new();
    let relay = s.host.world.spawn_unloaded_vehicle(
        "Relay 1",
        SHIP_POS + DVec3::new(0.0, 0.0, 50_000.0),
        zoom_relay_snapshot(),
    );
    s.tick(CameraInput::CYCLE_REMOTE);
    s.tick(CameraInput::empty());

    s.host.world.load_vehicle(relay).unwrap();
    s.tick(CameraInput::empty());
    assert_eq!(s.controller.state(), CameraState::ViewingLocal);

    // A loaded vehicle is no longer a remote candidate
    s.tick(CameraInput::CYCLE_REMOTE);
    assert_eq!(s.controller.state(), CameraState::ViewingLocal);
}

#[test]
fn test_integration_active_vehicle_unload_and_reload() {
    let mut s = Session::new();
    s.tick(CameraInput::CYCLE_LOCAL);
    s.tick(CameraInput::empty());
    let bound = s.controller.active_view().local_part().unwrap();

    s.host.world.unload_vehicle(s.ship).unwrap();
    s.tick(CameraInput::empty());
    assert_eq!(s.controller.state(), CameraState::Default);
    assert_eq!(s.host.camera.parent, Some(DEFAULT_CAMERA_PIVOT));

    let parts = s.host.world.load_vehicle(s.ship).unwrap();
    assert!(!parts.contains(&bound));
    s.tick(CameraInput::CYCLE_LOCAL);
    assert_eq!(s.controller.active_view().local_camera(), Some(CameraRef::new(parts[0], 1)));
}

#[test]
fn test_integration_staging_destroys_cameras_one_by_one() {
    let mut s = Session::new();
    s.tick(CameraInput::CYCLE_LOCAL);
    s.tick(CameraInput::empty());

    let parts = s.host.world.vehicle_parts(s.ship);
    s.host.destroy_part(&mut s.controller, parts[0]).unwrap();
    assert_eq!(s.controller.subscribed_part(), Some(parts[1]));
    s.tick(CameraInput::empty());

    s.host.destroy_part(&mut s.controller, parts[1]).unwrap();
    assert_eq!(s.controller.state(), CameraState::Default);
    assert!(!s.controller.is_overriding());
    assert_eq!(s.host.part_events.subscription_count(), 0);
}

#[test]
fn test_integration_leaving_flight_always_restores() {
    let mut s = Session::new();
    let relay = s.host.world.spawn_unloaded_vehicle(
        "Relay 1",
        SHIP_POS + DVec3::new(0.0, 0.0, 50_000.0),
        zoom_relay_snapshot(),
    );
    s.controller.activate_remote_camera(&mut s.host.context(), relay);
    s.tick(CameraInput::empty());

    s.host.change_scene(&mut s.controller, GameScene::SpaceCenter);
    assert!(!s.controller.is_overriding());
    assert_eq!(s.host.camera.target, Some(s.ship));
}

// ============================================================================
// CUSTOM HOST CAMERA
// ============================================================================

/// Camera that records setter order
#[derive(Default)]
struct RecordingCamera {
    calls: Vec<&'static str>,
    parent: Option<TransformRef>,
}

impl FlightCamera for RecordingCamera {
    fn parent(&self) -> Option<TransformRef> {
        self.parent.clone()
    }
    fn set_parent(&mut self, parent: Option<TransformRef>) {
        self.parent = parent;
        self.calls.push("parent");
    }
    fn local_position(&self) -> Vec3 {
        Vec3::ZERO
    }
    fn set_local_position(&mut self, _: Vec3) {
        self.calls.push("position");
    }
    fn local_rotation(&self) -> Quat {
        Quat::IDENTITY
    }
    fn set_local_rotation(&mut self, _: Quat) {
        self.calls.push("rotation");
    }
    fn fov(&self) -> f32 {
        60.0
    }
    fn set_fov(&mut self, _: f32) {
        self.calls.push("fov");
    }
    fn near_clip(&self) -> f32 {
        0.3
    }
    fn set_near_clip(&mut self, _: f32) {
        self.calls.push("clip");
    }
    fn set_target(&mut self, _: Option<VehicleKey>) {
        self.calls.push("target");
    }
    fn set_cam_coords_from_position(&mut self, _: DVec3) {
        self.calls.push("pivot");
    }
    fn set_distance_immediate(&mut self, _: f64) {
        self.calls.push("distance");
    }
}

#[test]
fn test_integration_restore_sets_parent_before_local_fields() {
    let mut s = Session::new();
    let mut camera = RecordingCamera::default();

    let tick = |s: &mut Session, camera: &mut RecordingCamera, input: CameraInput| {
        let mut ctx = HostContext::new(&s.host.world, camera, &mut s.host.notifier, &mut s.host.part_events);
        s.controller.update(&mut ctx, input);
    };

    tick(&mut s, &mut camera, CameraInput::CYCLE_LOCAL);
    tick(&mut s, &mut camera, CameraInput::empty());
    assert_eq!(camera.calls, vec!["target", "parent", "position", "rotation", "fov", "clip"]);

    camera.calls.clear();
    tick(&mut s, &mut camera, CameraInput::FORCE_RESTORE);
    let restore = &camera.calls[camera.calls.len() - 6..];
    assert_eq!(restore, ["parent", "position", "rotation", "clip", "fov", "target"]);
}
