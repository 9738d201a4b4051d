//! Common test utilities for integration tests.

use bevy::math::DVec3;
use bevy::prelude::*;

use ballista::physics::{drag_force, step, PhysicsPlugin};
use ballista::types::{launch_velocity, Projectile, ProjectileState, LAUNCH_POSITION, PHYSICS_DT};

/// Build a headless app with the physics stack on minimal plugins.
pub fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(PhysicsPlugin);
    app
}

/// Read the projectile state out of a headless app.
pub fn projectile_state(app: &mut App) -> ProjectileState {
    let mut query = app
        .world_mut()
        .query_filtered::<&ProjectileState, With<Projectile>>();
    query.single(app.world()).unwrap().clone()
}

/// A projectile freshly launched from the pad.
pub fn launched(speed: f64, angle_deg: f64) -> ProjectileState {
    ProjectileState::new(LAUNCH_POSITION, launch_velocity(speed, angle_deg))
}

/// Step a flight until the projectile crosses the ground plane.
/// Returns the landing state and the number of steps taken.
pub fn fly_until_landed(
    mut state: ProjectileState,
    surface_gravity: f64,
    atmosphere_density: f64,
) -> (ProjectileState, usize) {
    let gravity = DVec3::new(0.0, -surface_gravity, 0.0);
    let mut steps = 0;
    while state.pos.y >= 0.0 {
        let force = drag_force(state.vel, atmosphere_density);
        step(&mut state, gravity, force, PHYSICS_DT);
        steps += 1;
        assert!(steps < 1_000_000, "flight never landed");
    }
    (state, steps)
}

/// Closed-form flight time for a vacuum launch from height y0.
pub fn analytic_flight_time(speed: f64, angle_deg: f64, gravity: f64, y0: f64) -> f64 {
    let vy = speed * angle_deg.to_radians().sin();
    (vy + (vy * vy + 2.0 * gravity * y0).sqrt()) / gravity
}

/// Closed-form downrange distance for a vacuum launch from height y0.
pub fn analytic_range(speed: f64, angle_deg: f64, gravity: f64, y0: f64) -> f64 {
    let vx = speed * angle_deg.to_radians().cos();
    vx * analytic_flight_time(speed, angle_deg, gravity, y0)
}
