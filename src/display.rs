//! The read-only side of the engine that renderers and reports consume.

use chrono::{Days, NaiveDate};
use nalgebra::Point3;

use crate::consts::SECONDS_PER_DAY;
use crate::ephemerides::EPOCH;
use crate::orrery::Body;

/// Meters to scene units.
pub const POSITION_SCALE: f64 = 1e-11;

const RADIUS_SCALE: f64 = 0.005;
// Keeps the logarithm in `scaled_radius` finite and non-negative
const MIN_DISPLAY_RADIUS: f64 = 1.0;

/// A snapshot of one body, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: Point3<f32>,
    pub radius: f32,
    pub color: Point3<f32>,
}

impl BodyView {
    pub fn of(body: &Body) -> Self {
        BodyView {
            position: Point3::from((body.position * POSITION_SCALE).cast::<f32>()),
            radius: scaled_radius(body.radius),
            color: body.color.to_point(),
        }
    }
}

/// Bodies span too many orders of magnitude to draw to scale, so the drawn
/// radius grows with the logarithm of the real one.
pub fn scaled_radius(radius: f64) -> f32 {
    let radius = if radius.is_nan() {
        MIN_DISPLAY_RADIUS
    } else {
        radius.max(MIN_DISPLAY_RADIUS)
    };
    (RADIUS_SCALE * radius.ln()) as f32
}

/// The calendar date (UTC) reached after `elapsed_time` seconds of simulation,
/// formatted as `YYYY-MM-DD`. None if it falls outside the supported calendar.
pub fn iso_date(elapsed_time: f64) -> Option<String> {
    let (year, month, day) = EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;

    let days = (elapsed_time / SECONDS_PER_DAY).floor();
    if !(0.0..=(u32::MAX as f64)).contains(&days) {
        return None;
    }
    let date = epoch.checked_add_days(Days::new(days as u64))?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemerides::SOLAR_SYSTEM;

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(0.0).as_deref(), Some("2022-01-01"));
        assert_eq!(iso_date(86399.0).as_deref(), Some("2022-01-01"));
        assert_eq!(iso_date(86400.0).as_deref(), Some("2022-01-02"));
        assert_eq!(iso_date(31.0 * 86400.0).as_deref(), Some("2022-02-01"));
        assert_eq!(iso_date(365.0 * 86400.0).as_deref(), Some("2023-01-01"));
        assert_eq!(iso_date(-1.0), None);
        assert_eq!(iso_date(f64::NAN), None);
    }

    #[test]
    fn test_scaled_radius() {
        approx::assert_relative_eq!(scaled_radius(std::f64::consts::E), 0.005);
        assert_eq!(scaled_radius(1.0), 0.0);
        assert_eq!(scaled_radius(0.0), 0.0);
        assert_eq!(scaled_radius(-3.0), 0.0);
        assert_eq!(scaled_radius(f64::NAN), 0.0);

        // The sun is drawn bigger than the earth, but not by much
        let sun = scaled_radius(SOLAR_SYSTEM[0].radius);
        let earth = scaled_radius(SOLAR_SYSTEM[3].radius);
        assert!(sun > earth && sun < 2.0 * earth);
    }

    #[test]
    fn test_body_view() {
        let body = Body::from_ephemerides(&SOLAR_SYSTEM[3]);
        let view = BodyView::of(&body);

        approx::assert_relative_eq!(
            view.position,
            Point3::new(-0.2741147560901964, 1.907499306293577e-4, 1.452697499646169),
            max_relative = 1e-6
        );
        assert_eq!(view.radius, scaled_radius(body.radius));
        assert_eq!(view.color, body.color.to_point());
    }
}
