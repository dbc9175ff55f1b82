/// Circular orbit math — pure functions of elapsed time, no engine dependencies.
///
/// Positions are never accumulated: each tick recomputes from the scene clock,
/// so orbits cannot drift no matter how long the scene runs.

use glam::Vec3;

/// Position on a circular orbit in the XZ plane around the origin.
///
/// `(cos(t·speed)·d, 0, sin(t·speed)·d)` — at t = 0 every body sits on the
/// positive X axis.
pub fn orbit_position(t: f32, angular_speed: f32, distance: f32) -> Vec3 {
    let angle = t * angular_speed;
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Point on a circle of radius `r` in the XZ plane at the given angle.
/// Used for scattering belt rocks and starfield shells.
pub fn circle_point(angle: f32, r: f32) -> Vec3 {
    Vec3::new(angle.cos() * r, 0.0, angle.sin() * r)
}
