//! Core simulation types and constants for the projectile launcher.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Fixed physics timestep in seconds. One step is taken per rendered frame,
/// independent of actual frame duration.
pub const PHYSICS_DT: f64 = 1.0 / 60.0;

/// Drag coefficient of a sphere.
pub const DRAG_COEFFICIENT: f64 = 0.47;

/// Reference cross-section area in m² (unit-radius sphere).
pub const PROJECTILE_AREA: f64 = std::f64::consts::PI;

/// Projectile mass in kilograms.
pub const PROJECTILE_MASS: f64 = 5.0;

/// Projectile render radius in meters.
pub const PROJECTILE_RADIUS: f32 = 2.0;

/// Position the projectile starts from and is reset to.
pub const LAUNCH_POSITION: DVec3 = DVec3::new(0.0, 5.0, 0.0);

/// Launch velocity slider range in m/s.
pub const MIN_LAUNCH_SPEED: f64 = 1.0;
pub const MAX_LAUNCH_SPEED: f64 = 200.0;

/// Launch angle slider range in degrees.
pub const MIN_LAUNCH_ANGLE: f64 = 0.0;
pub const MAX_LAUNCH_ANGLE: f64 = 90.0;

/// Marker component for the single projectile entity.
#[derive(Component, Default)]
pub struct Projectile;

/// Physical state of the projectile.
/// Uses f64 (DVec3) for integration accuracy; the render layer mirrors
/// this into an f32 Transform each frame.
#[derive(Component, Clone, Debug)]
pub struct ProjectileState {
    /// Position in meters. Ground plane is y = 0.
    pub pos: DVec3,
    /// Velocity in meters per second.
    pub vel: DVec3,
}

impl Default for ProjectileState {
    fn default() -> Self {
        Self {
            pos: LAUNCH_POSITION,
            vel: DVec3::ZERO,
        }
    }
}

impl ProjectileState {
    pub fn new(pos: DVec3, vel: DVec3) -> Self {
        Self { pos, vel }
    }

    /// Current speed in m/s.
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Altitude above the ground plane, clamped to zero for display.
    /// The stored position may dip below zero on the contact step.
    pub fn display_altitude(&self) -> f64 {
        self.pos.y.max(0.0)
    }

    /// Signed horizontal distance along the launch axis.
    pub fn downrange(&self) -> f64 {
        self.pos.x
    }
}

/// The physics world: gravity and the implicit ground plane at y = 0.
///
/// Gravity always points straight down with magnitude equal to the active
/// body's surface gravity; it is reassigned whenever the selection changes.
#[derive(Resource, Clone, Debug)]
pub struct SimulationWorld {
    /// Gravitational acceleration in m/s².
    pub gravity: DVec3,
}

impl Default for SimulationWorld {
    fn default() -> Self {
        // Matches the default body (Earth) before any selection change.
        Self {
            gravity: DVec3::new(0.0, -9.81, 0.0),
        }
    }
}

impl SimulationWorld {
    /// Point gravity straight down with the given surface magnitude.
    pub fn set_surface_gravity(&mut self, surface_gravity: f64) {
        self.gravity = DVec3::new(0.0, -surface_gravity, 0.0);
    }
}

/// Flight lifecycle state.
///
/// `active` arms on launch and disarms exactly once, on the first step
/// where the projectile's vertical position drops below zero. It never
/// re-arms without an explicit launch.
#[derive(Resource, Clone, Debug, Default)]
pub struct FlightState {
    /// Whether a launched projectile is currently in flight.
    pub active: bool,
    /// App-clock launch timestamp in seconds, if launched.
    pub started_at: Option<f64>,
}

/// Build the initial velocity vector from launch parameters.
///
/// The launch plane is x/y: x downrange, y up. The lateral axis is unused.
pub fn launch_velocity(speed: f64, angle_deg: f64) -> DVec3 {
    let angle = angle_deg.to_radians();
    DVec3::new(speed * angle.cos(), speed * angle.sin(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_launch_velocity_components() {
        let v = launch_velocity(75.0, 45.0);
        assert_relative_eq!(v.x, 53.033, epsilon = 0.01);
        assert_relative_eq!(v.y, 53.033, epsilon = 0.01);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_launch_velocity_extremes() {
        // Horizontal launch: all speed along x
        let flat = launch_velocity(100.0, 0.0);
        assert_relative_eq!(flat.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(flat.y, 0.0, epsilon = 1e-9);

        // Vertical launch: all speed along y
        let up = launch_velocity(100.0, 90.0);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(up.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_display_altitude_clamps_negative() {
        let state = ProjectileState::new(DVec3::new(12.0, -0.3, 0.0), DVec3::ZERO);
        assert_eq!(state.display_altitude(), 0.0);
        // Stored position is left untouched
        assert_eq!(state.pos.y, -0.3);
    }

    #[test]
    fn test_default_state_is_launch_pad() {
        let state = ProjectileState::default();
        assert_eq!(state.pos, LAUNCH_POSITION);
        assert_eq!(state.vel, DVec3::ZERO);
        assert_eq!(state.display_altitude(), 5.0);
    }

    #[test]
    fn test_set_surface_gravity_points_down() {
        let mut world = SimulationWorld::default();
        world.set_surface_gravity(3.71);
        assert_eq!(world.gravity, DVec3::new(0.0, -3.71, 0.0));
    }
}
