use glam::DVec3;
use super::*;

fn kerbol_system() -> CelestialBody {
    CelestialBody::new("Sun", DVec3::new(0.0, 0.0, 0.0), 200.0)
        .with_orbiting(
            CelestialBody::new("Kerbin", DVec3::new(10_000.0, 0.0, 0.0), 600.0)
                .with_orbiting(CelestialBody::new("Mun", DVec3::new(10_000.0, 2_000.0, 0.0), 200.0)),
        )
        .with_orbiting(CelestialBody::new("Duna", DVec3::new(-20_000.0, 0.0, 0.0), 320.0))
}

// ============================================================================
// closest_point_on_segment
// ============================================================================

#[test]
fn test_closest_point_interior() {
    let p = closest_point_on_segment(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), DVec3::new(4.0, 3.0, 0.0));
    assert_eq!(p, Some(DVec3::new(4.0, 0.0, 0.0)));
}

#[test]
fn test_closest_point_clamps_to_endpoints() {
    let start = DVec3::ZERO;
    let end = DVec3::new(10.0, 0.0, 0.0);
    assert_eq!(closest_point_on_segment(start, end, DVec3::new(-5.0, 1.0, 0.0)), Some(start));
    assert_eq!(closest_point_on_segment(start, end, DVec3::new(15.0, 1.0, 0.0)), Some(end));
}

#[test]
fn test_closest_point_zero_length_segment() {
    let p = DVec3::new(1.0, 2.0, 3.0);
    assert_eq!(closest_point_on_segment(p, p, DVec3::ZERO), None);
}

// ============================================================================
// line_of_sight
// ============================================================================

#[test]
fn test_clear_line_of_sight() {
    let sun = kerbol_system();
    let a = DVec3::new(10_000.0, 1_000.0, 0.0);
    let b = DVec3::new(10_500.0, 1_000.0, 0.0);
    assert!(line_of_sight(a, b, &sun));
}

#[test]
fn test_planet_blocks_opposite_sides() {
    let sun = kerbol_system();
    let a = DVec3::new(10_000.0, -700.0, 0.0);
    let b = DVec3::new(10_000.0, 700.0, 0.0);
    assert!(!line_of_sight(a, b, &sun));
}

#[test]
fn test_leaving_the_shadow_restores_visibility() {
    let sun = kerbol_system();
    let a = DVec3::new(10_000.0, -700.0, 0.0);
    let b = DVec3::new(10_000.0, 700.0, 0.0);
    assert!(!line_of_sight(a, b, &sun));

    // Slide both points sideways past the limb
    let offset = DVec3::new(0.0, 0.0, 650.0);
    assert!(line_of_sight(a + offset, b + offset, &sun));
}

#[test]
fn test_moon_blocks_through_recursion() {
    let sun = kerbol_system();
    let a = DVec3::new(9_500.0, 2_000.0, 0.0);
    let b = DVec3::new(10_500.0, 2_000.0, 0.0);
    assert!(!line_of_sight(a, b, &sun));
}

#[test]
fn test_sun_blocks() {
    let sun = kerbol_system();
    let a = DVec3::new(-1_000.0, 0.0, 0.0);
    let b = DVec3::new(1_000.0, 0.0, 0.0);
    assert!(!line_of_sight(a, b, &sun));
}

#[test]
fn test_segment_ending_before_body_is_visible() {
    let sun = kerbol_system();
    // Points on the near side of Duna, segment stops short of it
    let a = DVec3::new(-18_000.0, 0.0, 0.0);
    let b = DVec3::new(-19_000.0, 0.0, 0.0);
    assert!(line_of_sight(a, b, &sun));
}

#[test]
fn test_symmetry() {
    let sun = kerbol_system();
    let points = [
        DVec3::new(10_000.0, -700.0, 0.0),
        DVec3::new(10_000.0, 700.0, 0.0),
        DVec3::new(9_500.0, 2_000.0, 0.0),
        DVec3::new(-20_000.0, 500.0, 0.0),
        DVec3::new(3_000.0, 3_000.0, 3_000.0),
        DVec3::new(-500.0, 0.0, 10.0),
    ];
    for a in points {
        for b in points {
            assert_eq!(line_of_sight(a, b, &sun), line_of_sight(b, a, &sun), "{:?} <-> {:?}", a, b);
        }
    }
}

#[test]
fn test_coincident_points_are_visible() {
    let sun = kerbol_system();
    // Even inside a body: no segment, nothing to occlude
    for p in [DVec3::ZERO, DVec3::new(10_000.0, 0.0, 0.0), DVec3::new(5.0, 5.0, 5.0)] {
        assert!(line_of_sight(p, p, &sun));
    }
}
