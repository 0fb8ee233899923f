use nalgebra::Vector3;

use crate::display::BodyView;
use crate::error::{require_positive, ConfigError};

mod body;

pub use body::{Body, BodyKind};

/// The full state of a simulation: every body, plus the clock.
///
/// The body list is fixed once the orrery is built. Outside the crate it can
/// only be read; the engine is the only thing that moves bodies around.
#[derive(Debug, Clone, PartialEq)]
pub struct Orrery {
    // Invariants:
    //   - `bodies` is non-empty
    //   - every mass and radius is positive, every position and velocity finite
    //   - `time_step` is positive and finite
    bodies: Vec<Body>,
    time_step: f64,
    elapsed_time: f64,
}

impl Orrery {
    pub fn new(bodies: Vec<Body>, time_step: f64) -> Result<Self, ConfigError> {
        require_positive(time_step, ConfigError::InvalidTimeStep)?;
        if bodies.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for body in bodies.iter() {
            require_positive(body.mass, |mass| ConfigError::InvalidMass {
                name: body.kind.to_string(),
                mass,
            })?;
            require_positive(body.radius, |radius| ConfigError::InvalidRadius {
                name: body.kind.to_string(),
                radius,
            })?;
            if !body.is_finite() {
                return Err(ConfigError::NonFiniteBody {
                    name: body.kind.to_string(),
                });
            }
        }

        Ok(Orrery {
            bodies,
            time_step,
            elapsed_time: 0.0,
        })
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn get_body(&self, index: usize) -> &Body {
        &self.bodies[index]
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    // Always false, but clippy wants it alongside `len`
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// What a renderer needs to draw one frame.
    pub fn render_view(&self) -> impl Iterator<Item = BodyView> + '_ {
        self.bodies.iter().map(BodyView::of)
    }

    pub fn dominant_body(&self) -> &Body {
        // Non-empty, so the first body is a fine starting point
        self.bodies
            .iter()
            .fold(&self.bodies[0], |best, b| if b.mass > best.mass { b } else { best })
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        let weighted: Vector3<f64> = self.bodies.iter().map(|b| b.mass * b.position).sum();
        weighted / self.total_mass()
    }

    /// Kinetic plus gravitational potential energy. Coincident pairs are left
    /// out of the potential, since it is unbounded there.
    pub fn total_energy(&self, newton_g: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();

        let mut potential = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in self.bodies[i + 1..].iter() {
                let d = (b.position - a.position).norm();
                if d > 0.0 {
                    potential -= newton_g * a.mass * b.mass / d;
                }
            }
        }

        kinetic + potential
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(crate) fn advance_clock(&mut self) {
        self.elapsed_time += self.time_step;
    }
}
