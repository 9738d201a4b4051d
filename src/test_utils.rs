//! Test utilities for projectile flight tests.
//!
//! Provides fixtures for creating launched projectile states and running
//! whole flights through the fixed-step integrator.

use bevy::math::DVec3;

use crate::physics::{drag_force, step};
use crate::types::{launch_velocity, ProjectileState, LAUNCH_POSITION, PHYSICS_DT};

/// Result of simulating a flight to touchdown.
pub struct FlightOutcome {
    /// State on the first step below the ground plane.
    pub state: ProjectileState,
    /// Number of fixed steps the flight took.
    pub steps: usize,
}

impl FlightOutcome {
    /// Flight time implied by the fixed timestep.
    pub fn flight_time(&self) -> f64 {
        self.steps as f64 * PHYSICS_DT
    }
}

pub mod fixtures {
    use super::*;

    /// A projectile freshly launched from the pad.
    pub fn launched(speed: f64, angle_deg: f64) -> ProjectileState {
        ProjectileState::new(LAUNCH_POSITION, launch_velocity(speed, angle_deg))
    }

    /// Step a flight until the projectile crosses the ground plane.
    ///
    /// Panics if the flight does not land within a generous step budget,
    /// which would indicate a broken integrator.
    pub fn fly_until_landed(
        mut state: ProjectileState,
        surface_gravity: f64,
        atmosphere_density: f64,
    ) -> FlightOutcome {
        let gravity = DVec3::new(0.0, -surface_gravity, 0.0);
        let mut steps = 0;
        while state.pos.y >= 0.0 {
            let force = drag_force(state.vel, atmosphere_density);
            step(&mut state, gravity, force, PHYSICS_DT);
            steps += 1;
            assert!(steps < 1_000_000, "flight never landed");
        }
        FlightOutcome { state, steps }
    }
}
