use nalgebra::Vector3;

use crate::orrery::Body;

/// Counts of the pairs that needed special handling during one force pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairStats {
    /// Pairs at exactly the same position. They pull on each other not at all,
    /// since there is no direction to pull in.
    pub coincident: usize,
    /// Pairs closer than the minimum separation. The inverse-square term uses
    /// the minimum separation instead of the real distance.
    pub clamped: usize,
}

impl PairStats {
    pub fn is_clean(&self) -> bool {
        self.coincident == 0 && self.clamped == 0
    }
}

/// Replaces every body's acceleration with the net Newtonian pull of all the
/// other bodies. Nothing but `acceleration` is written.
///
/// Each unordered pair is visited once, and the equal-and-opposite forces are
/// applied to both members.
pub fn compute_accelerations(bodies: &mut [Body], newton_g: f64, min_separation: f64) -> PairStats {
    let mut stats = PairStats::default();

    for body in bodies.iter_mut() {
        body.acceleration = Vector3::zeros();
    }

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            let delta = b.position - a.position;
            let distance_sq = delta.norm_squared();
            if distance_sq == 0.0 {
                stats.coincident += 1;
                continue;
            }

            let distance = distance_sq.sqrt();
            let effective = if distance < min_separation {
                stats.clamped += 1;
                min_separation
            } else {
                distance
            };

            // G / d^2 along the unit vector delta / |delta|
            let pull = delta * (newton_g / (effective * effective * distance));
            a.acceleration += pull * b.mass;
            b.acceleration -= pull * a.mass;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MIN_SEPARATION, NEWTON_G};
    use crate::ephemerides::{Color, SOLAR_SYSTEM};
    use crate::orrery::BodyKind;

    fn point_mass(mass: f64, position: Vector3<f64>) -> Body {
        Body {
            kind: BodyKind::Asteroid,
            mass,
            radius: 1.0,
            color: Color::GRAY,
            position,
            velocity: Vector3::zeros(),
            acceleration: Vector3::new(1.0, 2.0, 3.0),
        }
    }

    // The straightforward O(n^2) version: every body against every other body
    fn all_pairs(bodies: &[Body], newton_g: f64) -> Vec<Vector3<f64>> {
        bodies
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let mut acceleration = Vector3::zeros();
                for (j, b) in bodies.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let delta = b.position - a.position;
                    let d = delta.norm();
                    acceleration += newton_g * b.mass / (d * d) * (delta / d);
                }
                acceleration
            })
            .collect()
    }

    #[test]
    fn test_two_bodies() {
        let mut bodies = vec![
            point_mass(1e24, Vector3::zeros()),
            point_mass(2e20, Vector3::new(3e8, 4e8, 0.0)),
        ];
        let stats = compute_accelerations(&mut bodies, NEWTON_G, MIN_SEPARATION);
        assert!(stats.is_clean());

        // |a| = G m / d^2, pointing at the other body
        let d = 5e8;
        let direction = Vector3::new(0.6, 0.8, 0.0);
        approx::assert_relative_eq!(
            bodies[0].acceleration,
            direction * NEWTON_G * 2e20 / (d * d),
            max_relative = 1e-12
        );
        approx::assert_relative_eq!(
            bodies[1].acceleration,
            -direction * NEWTON_G * 1e24 / (d * d),
            max_relative = 1e-12
        );

        // Equal and opposite forces
        approx::assert_relative_eq!(
            bodies[0].mass * bodies[0].acceleration,
            -bodies[1].mass * bodies[1].acceleration,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_matches_all_pairs() {
        let mut bodies: Vec<Body> = SOLAR_SYSTEM.iter().map(Body::from_ephemerides).collect();
        let expected = all_pairs(&bodies, NEWTON_G);

        compute_accelerations(&mut bodies, NEWTON_G, MIN_SEPARATION);
        for (body, expected) in bodies.iter().zip(expected.iter()) {
            approx::assert_relative_eq!(body.acceleration, *expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_single_body_feels_nothing() {
        let mut bodies = vec![point_mass(1e30, Vector3::new(1.0, 2.0, 3.0))];
        let stats = compute_accelerations(&mut bodies, NEWTON_G, MIN_SEPARATION);

        assert!(stats.is_clean());
        assert_eq!(bodies[0].acceleration, Vector3::zeros());
    }

    #[test]
    fn test_coincident_bodies() {
        let mut bodies = vec![
            point_mass(1e10, Vector3::x()),
            point_mass(1e10, Vector3::x()),
            point_mass(1e10, Vector3::x() * 101.0),
        ];
        let stats = compute_accelerations(&mut bodies, NEWTON_G, MIN_SEPARATION);
        assert_eq!(
            stats,
            PairStats {
                coincident: 1,
                clamped: 0
            }
        );

        // The coincident pair cancels out; only the far body pulls
        let expected = NEWTON_G * 1e10 / 1e4;
        for body in bodies[..2].iter() {
            assert!(body.acceleration.iter().all(|x| x.is_finite()));
            approx::assert_relative_eq!(body.acceleration, Vector3::x() * expected, max_relative = 1e-12);
        }
        approx::assert_relative_eq!(
            bodies[2].acceleration,
            -Vector3::x() * 2.0 * expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_close_bodies_are_clamped() {
        let mut bodies = vec![
            point_mass(1e10, Vector3::zeros()),
            point_mass(1e10, Vector3::y() * 1e-3),
        ];
        let stats = compute_accelerations(&mut bodies, NEWTON_G, 10.0);
        assert_eq!(
            stats,
            PairStats {
                coincident: 0,
                clamped: 1
            }
        );

        // Same direction as the real pull, magnitude as if they were 10 m apart
        approx::assert_relative_eq!(
            bodies[0].acceleration,
            Vector3::y() * NEWTON_G * 1e10 / 100.0,
            max_relative = 1e-9
        );
    }
}
