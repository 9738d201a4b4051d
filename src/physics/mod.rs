//! Ballistic physics for the projectile.
//!
//! One fixed step of `PHYSICS_DT` is taken per rendered frame while a
//! flight is active: constant gravity from the active body, quadratic
//! atmospheric drag, then ground-contact detection. After touchdown the
//! projectile is parked where integration left it until the next launch
//! or reset.

mod drag;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

use crate::catalog::{profile, ActiveBody};
use crate::telemetry::{update_telemetry, Telemetry};
use crate::types::{
    launch_velocity, FlightState, Projectile, ProjectileState, SimulationWorld, LAUNCH_POSITION,
    PHYSICS_DT,
};

pub use drag::drag_force;
pub use integrator::step;

/// Event launching the projectile with user-chosen parameters.
///
/// Firing while a flight is active simply restarts it from the pad;
/// the UI disables its launch button in that window, but the operation
/// itself does not block.
#[derive(Message)]
pub struct LaunchEvent {
    /// Launch speed in m/s.
    pub speed: f64,
    /// Launch angle in degrees above the horizon.
    pub angle_deg: f64,
}

/// Event returning the projectile to the pad with zero velocity.
#[derive(Message)]
pub struct ResetEvent;

/// Plugin providing projectile physics, flight lifecycle, and telemetry.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationWorld>()
            .init_resource::<FlightState>()
            .init_resource::<ActiveBody>()
            .init_resource::<Telemetry>()
            .add_message::<LaunchEvent>()
            .add_message::<ResetEvent>()
            .add_systems(Startup, spawn_projectile)
            // Per-frame pipeline: selection bookkeeping, launch/reset
            // handling, integration, telemetry, then contact detection
            // (so the landing frame still reports).
            .add_systems(
                Update,
                (
                    apply_body_gravity,
                    reset_on_body_change,
                    handle_launch,
                    handle_reset,
                    physics_step,
                    update_telemetry,
                    detect_ground_contact,
                )
                    .chain(),
            );
    }
}

/// Spawn the single projectile physics entity at the launch pad.
///
/// The render layer attaches its visual components separately, so the
/// physics world stays testable without a display surface.
fn spawn_projectile(mut commands: Commands) {
    commands.spawn((Projectile, ProjectileState::default()));
    info!("Projectile ready on the pad at {:?}", LAUNCH_POSITION);
}

/// Keep world gravity matched to the active body's surface gravity.
fn apply_body_gravity(active: Res<ActiveBody>, mut world: ResMut<SimulationWorld>) {
    if !active.is_changed() {
        return;
    }
    let body = profile(active.0);
    world.set_surface_gravity(body.surface_gravity);
    info!("Gravity set to {} m/s² ({})", body.surface_gravity, body.name);
}

/// Selecting a different body puts the projectile back on the pad.
fn reset_on_body_change(active: Res<ActiveBody>, mut resets: MessageWriter<ResetEvent>) {
    if active.is_changed() && !active.is_added() {
        resets.write(ResetEvent);
    }
}

/// Apply the most recent launch request.
fn handle_launch(
    mut events: MessageReader<LaunchEvent>,
    mut flight: ResMut<FlightState>,
    time: Res<Time>,
    mut projectile: Query<&mut ProjectileState, With<Projectile>>,
) {
    let Some(launch) = events.read().last() else {
        return;
    };
    let Ok(mut state) = projectile.single_mut() else {
        return;
    };

    state.pos = LAUNCH_POSITION;
    state.vel = launch_velocity(launch.speed, launch.angle_deg);
    flight.active = true;
    flight.started_at = Some(time.elapsed_secs_f64());
    info!(
        "Launch: {:.0} m/s at {:.0}°",
        launch.speed, launch.angle_deg
    );
}

/// Return the projectile to the pad and clear flight state.
fn handle_reset(
    mut events: MessageReader<ResetEvent>,
    mut flight: ResMut<FlightState>,
    mut telemetry: ResMut<Telemetry>,
    mut projectile: Query<&mut ProjectileState, With<Projectile>>,
) {
    if events.read().last().is_none() {
        return;
    }
    let Ok(mut state) = projectile.single_mut() else {
        return;
    };

    *state = ProjectileState::default();
    flight.active = false;
    flight.started_at = None;
    *telemetry = Telemetry::after_reset();
}

/// Advance the projectile by one fixed timestep while in flight.
///
/// Drag is recomputed from the current velocity each step (zero on
/// airless bodies) and applied for this step only.
pub fn physics_step(
    world: Res<SimulationWorld>,
    flight: Res<FlightState>,
    active: Res<ActiveBody>,
    mut projectile: Query<&mut ProjectileState, With<Projectile>>,
) {
    if !flight.active {
        return;
    }
    let Ok(mut state) = projectile.single_mut() else {
        return;
    };

    let density = profile(active.0).atmosphere_density;
    let force = drag_force(state.vel, density);
    integrator::step(&mut state, world.gravity, force, PHYSICS_DT);
}

/// End the flight on the first step that puts the projectile below the
/// ground plane. The stored position is left where integration put it;
/// there is no bounce and no clamping.
pub fn detect_ground_contact(
    mut flight: ResMut<FlightState>,
    projectile: Query<&ProjectileState, With<Projectile>>,
) {
    if !flight.active {
        return;
    }
    let Ok(state) = projectile.single() else {
        return;
    };
    if state.pos.y < 0.0 {
        flight.active = false;
        info!("Touchdown at {:.1} m downrange", state.pos.x);
    }
}
