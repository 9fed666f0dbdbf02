/// CelestialBody: a spherical occluder and the bodies orbiting it.

use glam::DVec3;

/// Node of the celestial hierarchy.
///
/// The root is the sun; each body owns the bodies orbiting it.
/// Positions are world-space, in the same frame as vehicle centers of mass.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub position: DVec3,
    pub radius: f64,
    pub orbiting_bodies: Vec<CelestialBody>,
}

impl CelestialBody {
    /// Body with no satellites
    pub fn new(name: impl Into<String>, position: DVec3, radius: f64) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            orbiting_bodies: Vec::new(),
        }
    }

    /// Builder: add an orbiting body
    pub fn with_orbiting(mut self, body: CelestialBody) -> Self {
        self.orbiting_bodies.push(body);
        self
    }
}
