//! The two stages of a simulation step.
//!
//! Every step first runs [compute_accelerations] over all bodies, and then
//! [semi_implicit_euler]. Both work on a plain slice of bodies, so they can be
//! used outside of [crate::sim::OrbitalSim].

mod gravity;
mod integrator;

pub use gravity::{compute_accelerations, PairStats};
pub use integrator::{euler_update, semi_implicit_euler};
