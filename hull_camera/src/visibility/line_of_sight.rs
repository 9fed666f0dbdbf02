/// Line of sight against a hierarchy of spherical bodies.
///
/// For each body, the point of segment `start..end` nearest to the body's
/// center is computed (clamped to the segment). If it lies inside the body,
/// the segment is occluded. Otherwise the test recurses into the bodies
/// orbiting it. The test is symmetric in `start` and `end`.

use glam::DVec3;
use super::celestial_body::CelestialBody;

/// Point of segment `start..end` nearest to `point`.
///
/// Returns `None` for a zero-length segment.
pub fn closest_point_on_segment(start: DVec3, end: DVec3, point: DVec3) -> Option<DVec3> {
    let segment = end - start;
    let length = segment.length();
    if length <= f64::EPSILON {
        return None;
    }
    let direction = segment / length;
    let along = direction.dot(point - start).clamp(0.0, length);
    Some(start + direction * along)
}

/// Whether `start` and `end` can see each other past every body under `root`.
///
/// Coincident points are trivially visible.
pub fn line_of_sight(start: DVec3, end: DVec3, root: &CelestialBody) -> bool {
    if (end - start).length() <= f64::EPSILON {
        return true;
    }
    !occluded_by(start, end, root)
}

fn occluded_by(start: DVec3, end: DVec3, body: &CelestialBody) -> bool {
    let Some(nearest) = closest_point_on_segment(start, end, body.position) else {
        return false;
    };
    if nearest.distance(body.position) < body.radius {
        return true;
    }
    body.orbiting_bodies
        .iter()
        .any(|child| occluded_by(start, end, child))
}

#[cfg(test)]
#[path = "line_of_sight_tests.rs"]
mod tests;
