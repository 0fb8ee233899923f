use std::f64::consts::PI;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.6743e-11;

pub const SECONDS_PER_DAY: f64 = 86400.0;

// Defaults for the driver: 60 simulated days per real second, at 60 frames per second
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_DAYS_PER_SECOND: f64 = 60.0;

// Asteroid belt
pub const ASTEROIDS_MEAN_RADIUS: f64 = 4e11;
pub const ASTEROID_COUNT: usize = 500;
pub const ASTEROID_MASS: f64 = 1e12; // about a billion tons
pub const ASTEROID_RADIUS: f64 = 2e3;
pub const ASTEROID_SPEED_FACTOR: (f64, f64) = (0.6, 1.2);
pub const ASTEROID_VERTICAL_SPEED: f64 = 1e2;

// Pairs closer than this use it in the inverse-square term instead
pub const MIN_SEPARATION: f64 = 1.0;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

pub fn get_period(a: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * a.powi(3) / mu).sqrt()
}
