pub mod asteroid;
pub mod clock;
pub mod config;
pub mod consts;
pub mod display;
pub mod ephemerides;
pub mod error;
pub mod logger;
pub mod math;
pub mod orrery;
pub mod physics;
pub mod sim;
