//! Procedural asteroid belts.
//!
//! Asteroids are scattered over a disk in the xz-plane around the origin, on
//! roughly circular orbits around the dominant body. The orbital radius is
//! `mean_radius * sqrt(|l|)`, where `l` is logistically distributed around 1:
//! disk point picking, but with the logit draw in place of a uniform one, so the
//! belt thins out towards the center and has a long outer tail.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::consts::{
    ASTEROID_MASS, ASTEROID_RADIUS, ASTEROID_SPEED_FACTOR, ASTEROID_VERTICAL_SPEED,
};
use crate::ephemerides::Color;
use crate::error::{require_positive, ConfigError};
use crate::math::random::Sampler;
use crate::orrery::{Body, BodyKind};

// No asteroid gets closer to the center than this fraction of the mean radius
const MIN_RADIUS_FRACTION: f64 = 1e-3;

#[derive(Debug, Clone)]
pub struct AsteroidGenerator {
    dominant_mu: f64,
    mean_radius: f64,
}

impl AsteroidGenerator {
    pub fn new(dominant_mass: f64, mean_radius: f64, newton_g: f64) -> Result<Self, ConfigError> {
        require_positive(dominant_mass, ConfigError::InvalidDominantMass)?;
        require_positive(mean_radius, ConfigError::InvalidBeltRadius)?;
        require_positive(newton_g, ConfigError::InvalidGravitationalConstant)?;

        Ok(AsteroidGenerator {
            dominant_mu: newton_g * dominant_mass,
            mean_radius,
        })
    }

    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// Speed of a circular orbit at distance `r` from the dominant body.
    pub fn circular_speed(&self, r: f64) -> f64 {
        (self.dominant_mu / r).sqrt()
    }

    pub fn generate(&self, sampler: &mut Sampler) -> Body {
        let l = sampler.logistic(1.0);
        let r = (self.mean_radius * l.abs().sqrt()).max(self.mean_radius * MIN_RADIUS_FRACTION);
        let phi = sampler.uniform(0.0, 2.0 * PI);

        // Perturbing the circular speed gives a spread of eccentricities
        let (lo, hi) = ASTEROID_SPEED_FACTOR;
        let v = self.circular_speed(r) * sampler.uniform(lo, hi);
        let vy = sampler.uniform(-ASTEROID_VERTICAL_SPEED, ASTEROID_VERTICAL_SPEED);

        let (sin, cos) = phi.sin_cos();
        Body {
            kind: BodyKind::Asteroid,
            mass: ASTEROID_MASS,
            radius: ASTEROID_RADIUS,
            color: Color::GRAY,
            position: Vector3::new(r * cos, 0.0, r * sin),
            velocity: Vector3::new(-v * sin, vy, v * cos),
            acceleration: Vector3::zeros(),
        }
    }
}
