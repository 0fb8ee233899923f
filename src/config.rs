use crate::consts::{
    ASTEROIDS_MEAN_RADIUS, ASTEROID_COUNT, DEFAULT_DAYS_PER_SECOND, DEFAULT_FPS, MIN_SEPARATION,
    NEWTON_G, SECONDS_PER_DAY,
};
use crate::ephemerides::Catalog;
use crate::error::{require_positive, ConfigError};

/// Everything needed to set up a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub catalog: Catalog,
    pub asteroid_count: usize,
    pub gravitational_constant: f64,
    /// Mean orbital radius of the asteroid belt, in meters
    pub asteroid_belt_radius: f64,
    /// Simulated seconds per step
    pub time_step: f64,
    /// Steps per real second, for drivers that run in real time
    pub fps: u32,
    pub min_separation: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_rate(DEFAULT_FPS, DEFAULT_DAYS_PER_SECOND)
    }
}

impl SimConfig {
    /// Picks the time step so that `days_per_second` simulated days pass for
    /// every real second at `fps` steps per second.
    pub fn from_rate(fps: u32, days_per_second: f64) -> Self {
        SimConfig {
            catalog: Catalog::default(),
            asteroid_count: ASTEROID_COUNT,
            gravitational_constant: NEWTON_G,
            asteroid_belt_radius: ASTEROIDS_MEAN_RADIUS,
            time_step: days_per_second * SECONDS_PER_DAY / fps as f64,
            fps,
            min_separation: MIN_SEPARATION,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.time_step, ConfigError::InvalidTimeStep)?;
        if self.fps == 0 {
            return Err(ConfigError::InvalidFrameRate(self.fps));
        }
        require_positive(
            self.gravitational_constant,
            ConfigError::InvalidGravitationalConstant,
        )?;
        require_positive(self.asteroid_belt_radius, ConfigError::InvalidBeltRadius)?;
        require_positive(self.min_separation, ConfigError::InvalidMinSeparation)?;
        Ok(())
    }
}
