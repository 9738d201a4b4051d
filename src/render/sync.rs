//! Pose synchronization between physics and rendering.
//!
//! The projectile's f64 physics position is mirrored read-only into its
//! f32 render transform once per frame.

use bevy::prelude::*;

use crate::types::{Projectile, ProjectileState};

/// Copy the physics pose into the render transform.
pub fn sync_projectile_transform(
    mut query: Query<(&mut Transform, &ProjectileState), With<Projectile>>,
) {
    for (mut transform, state) in query.iter_mut() {
        transform.translation = state.pos.as_vec3();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec3;

    #[test]
    fn test_sync_mirrors_physics_position() {
        let mut app = App::new();
        app.add_systems(Update, sync_projectile_transform);

        let entity = app
            .world_mut()
            .spawn((
                Projectile,
                ProjectileState::new(DVec3::new(12.5, 30.0, 0.0), DVec3::ZERO),
                Transform::default(),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(12.5, 30.0, 0.0));
    }

    #[test]
    fn test_sync_is_read_only_for_physics() {
        let mut app = App::new();
        app.add_systems(Update, sync_projectile_transform);

        let pos = DVec3::new(-3.0, 0.25, 0.0);
        let entity = app
            .world_mut()
            .spawn((
                Projectile,
                ProjectileState::new(pos, DVec3::new(1.0, 2.0, 0.0)),
                Transform::default(),
            ))
            .id();

        app.update();

        let state = app.world().get::<ProjectileState>(entity).unwrap();
        assert_eq!(state.pos, pos);
        assert_eq!(state.vel, DVec3::new(1.0, 2.0, 0.0));
    }
}
