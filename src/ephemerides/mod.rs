//! Initial conditions for the simulated star systems.
//!
//! Each catalog is a static table of [EphemeridesBody] entries, sampled at
//! [EPOCH]. Positions are in meters and velocities in m/s, in an inertial frame
//! centered near the system's barycenter, with the y axis normal to the
//! ecliptic.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Point3, Vector3};

use crate::error::UnknownCatalog;

mod data;

pub use data::{ALPHA_CENTAURI_SYSTEM, SOLAR_SYSTEM};

/// Year, month and day at which every catalog was sampled.
pub const EPOCH: (i32, u32, u32) = (2022, 1, 1);

/// An 8-bit RGB display color. Irrelevant to the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GOLD: Color = Color::rgb(255, 203, 0);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const BEIGE: Color = Color::rgb(211, 176, 131);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const SKY_BLUE: Color = Color::rgb(102, 191, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 82, 172);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// The color as normalized floats, which is what renderers want.
    pub fn to_point(self) -> Point3<f32> {
        Point3::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// One row of a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemeridesBody {
    pub name: &'static str,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl EphemeridesBody {
    pub fn position(&self) -> Vector3<f64> {
        Vector3::from(self.position)
    }

    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::from(self.velocity)
    }
}

/// The star systems we ship initial conditions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Catalog {
    #[default]
    SolarSystem,
    AlphaCentauri,
}

impl Catalog {
    pub const ALL: [Catalog; 2] = [Catalog::SolarSystem, Catalog::AlphaCentauri];

    pub fn bodies(self) -> &'static [EphemeridesBody] {
        match self {
            Catalog::SolarSystem => SOLAR_SYSTEM,
            Catalog::AlphaCentauri => ALPHA_CENTAURI_SYSTEM,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Catalog::SolarSystem => "solar-system",
            Catalog::AlphaCentauri => "alpha-centauri",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = UnknownCatalog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "solar-system" | "solar" | "sol" => Ok(Catalog::SolarSystem),
            "alpha-centauri" | "alpha" => Ok(Catalog::AlphaCentauri),
            _ => Err(UnknownCatalog(s.to_owned())),
        }
    }
}

/// Returns the heaviest entry of a catalog, if there is one.
pub fn dominant_body(catalog: &[EphemeridesBody]) -> Option<&EphemeridesBody> {
    catalog
        .iter()
        .max_by(|a, b| a.mass.total_cmp(&b.mass))
}
