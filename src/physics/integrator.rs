//! Fixed-step rigid-body integration for the projectile.
//!
//! Semi-implicit (symplectic) Euler: velocity first, then position with
//! the updated velocity. Runs at a constant step of `PHYSICS_DT` per
//! frame; there is no adaptive or variable timestep.

use bevy::math::DVec3;

use crate::types::{ProjectileState, PROJECTILE_MASS};

/// Advance the projectile by one fixed timestep.
///
/// Gravity is a constant acceleration; `external_force` (drag, this
/// step only) is converted to acceleration through the projectile mass.
pub fn step(state: &mut ProjectileState, gravity: DVec3, external_force: DVec3, dt: f64) {
    let acc = gravity + external_force / PROJECTILE_MASS;
    state.vel += acc * dt;
    state.pos += state.vel * dt;
}
