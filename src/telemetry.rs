//! Per-frame telemetry derived from projectile state.
//!
//! Telemetry is a pure function of the current projectile state and the
//! elapsed time since launch; no independent state is kept. While no
//! flight is active the last snapshot is held until launch or reset
//! overwrite it.

use bevy::prelude::*;

use crate::types::{FlightState, Projectile, ProjectileState, LAUNCH_POSITION};

/// Display values recomputed each frame of an active flight.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct Telemetry {
    /// Speed in m/s.
    pub speed: f64,
    /// Altitude above ground in meters, clamped to non-negative.
    pub altitude: f64,
    /// Signed downrange distance in meters (x-axis only).
    pub distance: f64,
    /// Seconds since launch.
    pub time: f64,
}

impl Telemetry {
    /// Snapshot reported right after a reset. Altitude reads as the
    /// launch-pad height, not zero; everything else is zeroed.
    pub fn after_reset() -> Self {
        Self {
            altitude: LAUNCH_POSITION.y,
            ..Self::default()
        }
    }
}

/// Derive a telemetry snapshot from the projectile state.
pub fn snapshot(state: &ProjectileState, elapsed: f64) -> Telemetry {
    Telemetry {
        speed: state.speed(),
        altitude: state.display_altitude(),
        distance: state.downrange(),
        time: elapsed,
    }
}

/// Refresh the telemetry resource while a flight is active.
///
/// Runs after the physics step and before ground-contact detection, so
/// the landing frame still reports its (altitude-clamped) final values.
pub fn update_telemetry(
    flight: Res<FlightState>,
    time: Res<Time>,
    projectile: Query<&ProjectileState, With<Projectile>>,
    mut telemetry: ResMut<Telemetry>,
) {
    if !flight.active {
        return;
    }
    let Some(started_at) = flight.started_at else {
        return;
    };
    let Ok(state) = projectile.single() else {
        return;
    };
    *telemetry = snapshot(state, time.elapsed_secs_f64() - started_at);
}
