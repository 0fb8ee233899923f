use nalgebra::Vector3;

use crate::orrery::Body;

/// Semi-implicit (symplectic) Euler: velocity first, then position using the
/// new velocity. Keeps orbits from spiralling the way explicit Euler does.
pub fn semi_implicit_euler(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut() {
        let (position, velocity) = euler_update(body, dt);
        body.position = position;
        body.velocity = velocity;
    }
}

/// One body's position and velocity after a semi-implicit Euler step, without
/// touching the body.
pub fn euler_update(body: &Body, dt: f64) -> (Vector3<f64>, Vector3<f64>) {
    let velocity = body.velocity + body.acceleration * dt;
    (body.position + velocity * dt, velocity)
}
