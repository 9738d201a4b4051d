//! Property-based tests for ballistic flight invariants.

use bevy::math::DVec3;
use proptest::prelude::*;

use crate::physics::drag_force;
use crate::test_utils::fixtures;
use crate::types::{launch_velocity, DRAG_COEFFICIENT, PROJECTILE_AREA};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Drag is always zero on an airless body, at any velocity.
    #[test]
    fn prop_vacuum_never_drags(
        vx in -200.0f64..200.0,
        vy in -200.0f64..200.0,
    ) {
        let force = drag_force(DVec3::new(vx, vy, 0.0), 0.0);
        prop_assert_eq!(force, DVec3::ZERO);
    }

    /// Drag magnitude follows the quadratic law and opposes motion.
    #[test]
    fn prop_drag_quadratic_and_opposed(
        vx in 1.0f64..200.0,
        vy in 1.0f64..200.0,
        density in 0.001f64..2.0,
    ) {
        let vel = DVec3::new(vx, vy, 0.0);
        let force = drag_force(vel, density);

        let speed = vel.length();
        let expected = 0.5 * DRAG_COEFFICIENT * density * PROJECTILE_AREA * speed * speed;
        prop_assert!((force.length() - expected).abs() / expected < 1e-9);

        // Antiparallel to velocity
        prop_assert!(force.dot(vel) < 0.0);
        let cross = force.cross(vel).length();
        prop_assert!(cross / (force.length() * speed) < 1e-9);
    }

    /// Every launch within the slider ranges eventually lands, below the
    /// ground plane, with non-negative downrange distance.
    #[test]
    fn prop_all_launches_land(
        speed in 1.0f64..=200.0,
        angle in 0.0f64..=90.0,
        gravity in 1.0f64..25.0,
        density in 0.0f64..1.3,
    ) {
        let outcome = fixtures::fly_until_landed(fixtures::launched(speed, angle), gravity, density);
        prop_assert!(outcome.state.pos.y < 0.0);
        prop_assert!(outcome.state.pos.x >= 0.0);
        prop_assert!(outcome.steps > 0);
    }

    /// In vacuum the horizontal velocity component is conserved for the
    /// whole flight.
    #[test]
    fn prop_vacuum_conserves_horizontal_velocity(
        speed in 1.0f64..=200.0,
        angle in 0.0f64..=90.0,
    ) {
        let initial = launch_velocity(speed, angle);
        let outcome = fixtures::fly_until_landed(fixtures::launched(speed, angle), 9.81, 0.0);
        prop_assert!((outcome.state.vel.x - initial.x).abs() < 1e-9);
        prop_assert!(outcome.state.vel.z.abs() < 1e-12);
    }

    /// Drag never reverses the direction of motion within a single step:
    /// the dragged flight is slower than the vacuum flight at landing,
    /// never retrograde.
    #[test]
    fn prop_drag_decelerates_monotonically(
        speed in 10.0f64..=200.0,
        angle in 10.0f64..=80.0,
    ) {
        let dragged = fixtures::fly_until_landed(fixtures::launched(speed, angle), 9.81, 1.225);
        let vacuum = fixtures::fly_until_landed(fixtures::launched(speed, angle), 9.81, 0.0);
        prop_assert!(dragged.state.pos.x <= vacuum.state.pos.x + 1e-9);
        prop_assert!(dragged.state.vel.x >= 0.0);
    }
}
