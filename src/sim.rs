use log::{debug, error, info, warn};
use nalgebra::Vector3;

use crate::asteroid::AsteroidGenerator;
use crate::config::SimConfig;
use crate::ephemerides::{dominant_body, EphemeridesBody};
use crate::error::{ConfigError, StepError};
use crate::math::random::{self, Sampler};
use crate::orrery::{Body, Orrery};
use crate::physics::{compute_accelerations, euler_update, PairStats};

/// What happened during one call to [OrbitalSim::step].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 1 for the first step, and so on
    pub step: u64,
    pub pairs: PairStats,
}

/// The simulation engine. Owns the [Orrery] and advances it one step at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalSim {
    orrery: Orrery,
    newton_g: f64,
    min_separation: f64,
    steps_taken: u64,
}

impl OrbitalSim {
    /// Builds the simulation described by `config`, drawing asteroids from the
    /// process-wide sampler.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        random::with_global(|sampler| Self::build(config, sampler))
    }

    /// Builds the simulation described by `config`, drawing asteroids from
    /// `sampler`.
    pub fn build(config: &SimConfig, sampler: &mut Sampler) -> Result<Self, ConfigError> {
        Self::with_catalog(config, config.catalog.bodies(), sampler)
    }

    /// Builds a simulation around a hand-made catalog instead of one of the
    /// shipped ones. `config.catalog` plays no part here; everything else in
    /// `config` does.
    pub fn with_catalog(
        config: &SimConfig,
        catalog: &[EphemeridesBody],
        sampler: &mut Sampler,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let dominant = dominant_body(catalog).ok_or(ConfigError::EmptyCatalog)?;
        let generator = AsteroidGenerator::new(
            dominant.mass,
            config.asteroid_belt_radius,
            config.gravitational_constant,
        )?;

        let mut bodies = Vec::with_capacity(catalog.len() + config.asteroid_count);
        bodies.extend(catalog.iter().map(Body::from_ephemerides));
        bodies.extend((0..config.asteroid_count).map(|_| generator.generate(sampler)));
        debug!(
            "Generated {} asteroids around {} (mean radius {:e} m)",
            config.asteroid_count,
            dominant.name,
            generator.mean_radius()
        );

        let orrery = Orrery::new(bodies, config.time_step)?;
        info!(
            "Constructed simulation with {} bodies, time step {} s",
            orrery.len(),
            orrery.time_step()
        );

        Ok(OrbitalSim {
            orrery,
            newton_g: config.gravitational_constant,
            min_separation: config.min_separation,
            steps_taken: 0,
        })
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn newton_g(&self) -> f64 {
        self.newton_g
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn elapsed_time(&self) -> f64 {
        self.orrery.elapsed_time()
    }

    /// Advances the simulation by one time step: forces, then integration,
    /// then the clock.
    ///
    /// A step either happens completely or not at all. If any acceleration or
    /// any integrated position or velocity comes out non-finite, positions,
    /// velocities and the clock are left as they were and an error is
    /// returned. The simulation should not be stepped again after that.
    pub fn step(&mut self) -> Result<StepReport, StepError> {
        let step = self.steps_taken + 1;
        let dt = self.orrery.time_step();
        let bodies = self.orrery.bodies_mut();

        let pairs = compute_accelerations(bodies, self.newton_g, self.min_separation);
        if let Some(index) = bodies
            .iter()
            .position(|b| !b.acceleration.iter().all(|x| x.is_finite()))
        {
            let body = &bodies[index];
            error!(
                "Body {} ({}) has acceleration {:?}",
                index, body.kind, body.acceleration
            );
            return Err(StepError::NonFiniteAcceleration { index, step });
        }

        let next: Vec<_> = bodies.iter().map(|b| euler_update(b, dt)).collect();
        let is_finite = |v: &Vector3<f64>| v.iter().all(|x| x.is_finite());
        if let Some(index) = next
            .iter()
            .position(|(position, velocity)| !is_finite(position) || !is_finite(velocity))
        {
            error!("Body {} ({}) would leave the finite world", index, bodies[index].kind);
            return Err(StepError::NonFiniteState { index, step });
        }
        for (body, (position, velocity)) in bodies.iter_mut().zip(next) {
            body.position = position;
            body.velocity = velocity;
        }

        self.orrery.advance_clock();
        self.steps_taken = step;

        if pairs.coincident > 0 {
            warn!("Step {}: {} coincident pairs ignored", step, pairs.coincident);
        }
        if pairs.clamped > 0 {
            warn!(
                "Step {}: {} pairs closer than {} m were clamped",
                step, pairs.clamped, self.min_separation
            );
        }

        Ok(StepReport { step, pairs })
    }
}
