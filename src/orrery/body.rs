use std::fmt;

use nalgebra::Vector3;

use crate::ephemerides::{Color, EphemeridesBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Catalog(&'static str),
    Asteroid,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Catalog(name) => f.write_str(name),
            BodyKind::Asteroid => f.write_str("asteroid"),
        }
    }
}

/// A point mass. `radius` and `color` are only for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    // Recomputed from scratch every step
    pub acceleration: Vector3<f64>,
}

impl Body {
    pub fn from_ephemerides(entry: &EphemeridesBody) -> Self {
        Body {
            kind: BodyKind::Catalog(entry.name),
            mass: entry.mass,
            radius: entry.radius,
            color: entry.color,
            position: entry.position(),
            velocity: entry.velocity(),
            acceleration: Vector3::zeros(),
        }
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|x| x.is_finite()) && self.velocity.iter().all(|x| x.is_finite())
    }
}
