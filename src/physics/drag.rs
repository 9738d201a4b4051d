//! Quadratic atmospheric drag.

use bevy::math::DVec3;

use crate::types::{DRAG_COEFFICIENT, PROJECTILE_AREA};

/// Compute the drag force on the projectile for the current step.
///
/// `F = -0.5 · Cd · ρ · A · |v| · v̂`, pointing against the velocity.
/// Zero in vacuum (`density <= 0`) and at rest, where the direction is
/// undefined. The force is recomputed from the current velocity every
/// step and never accumulated.
pub fn drag_force(vel: DVec3, atmosphere_density: f64) -> DVec3 {
    if atmosphere_density <= 0.0 {
        return DVec3::ZERO;
    }
    let speed = vel.length();
    if speed <= 0.0 {
        return DVec3::ZERO;
    }
    let magnitude = 0.5 * DRAG_COEFFICIENT * atmosphere_density * PROJECTILE_AREA * speed * speed;
    vel * (-magnitude / speed)
}
